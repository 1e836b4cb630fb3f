use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::portfolio::realized::RealizedService;
use crate::settings::Settings;
use crate::trades::{NewTrade, Trade, TradeServiceTrait, TradeSide};

struct MockTradeService {
    trades: Vec<Trade>,
}

impl TradeServiceTrait for MockTradeService {
    fn get_trades(&self, account_id: &str) -> Result<Vec<Trade>> {
        Ok(self
            .trades
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }

    fn add_trade(&self, _account_id: &str, _new_trade: NewTrade) -> Result<Trade> {
        unimplemented!("Not needed for tests")
    }

    fn delete_trades(&self, _account_id: &str, _trade_ids: &[String]) -> Result<Vec<Trade>> {
        unimplemented!("Not needed for tests")
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn trade(ticker: &str, date_: NaiveDate, side: TradeSide, qty: Decimal, amount: Decimal) -> Trade {
    Trade {
        id: format!("{}-{}-{:?}", ticker, date_, side),
        account_id: "domestic".to_string(),
        ticker: ticker.to_string(),
        name: format!("{} ETF", ticker),
        category: "Domestic Equity".to_string(),
        sub_category: Some("Domestic Equity Index".to_string()),
        trade_date: date_,
        side,
        quantity: qty,
        unit_price: amount / qty,
        amount,
    }
}

fn service(trades: Vec<Trade>) -> RealizedService {
    RealizedService::new(
        Arc::new(MockTradeService { trades }),
        Arc::new(Settings::default()),
    )
}

#[test]
fn partial_sell_realizes_proportional_cost() {
    let service = service(vec![
        trade("069500", date(2025, 1, 10), TradeSide::Buy, dec!(10), dec!(1000)),
        trade("069500", date(2025, 1, 20), TradeSide::Sell, dec!(4), dec!(500)),
    ]);

    let report = service.report("domestic").unwrap();
    assert_eq!(report.trades.len(), 1);

    let row = &report.trades[0];
    // buy fee floor(1000 * 0.001) = 1, matched 4/10 of 1001 = 400.4.
    // sell fee floor(500 * 0.001) = 0, net proceeds 500.
    assert_eq!(row.quantity, dec!(4));
    assert_eq!(row.buy_date, Some(date(2025, 1, 10)));
    assert_eq!(row.sell_date, date(2025, 1, 20));
    assert_eq!(row.buy_unit_price, dec!(100.1));
    assert_eq!(row.sell_unit_price, dec!(125));
    assert_eq!(row.profit, dec!(99.6));
    assert_eq!(
        row.return_pct.unwrap().round_dp(2),
        (dec!(99.6) / dec!(400.4) * dec!(100)).round_dp(2)
    );
    assert_eq!(report.total_profit, dec!(99.6));
}

#[test]
fn sell_spanning_two_lots_reports_the_last_lot_date() {
    let service = service(vec![
        trade("069500", date(2025, 1, 10), TradeSide::Buy, dec!(4), dec!(400)),
        trade("069500", date(2025, 2, 10), TradeSide::Buy, dec!(6), dec!(720)),
        trade("069500", date(2025, 3, 10), TradeSide::Sell, dec!(7), dec!(910)),
    ]);

    let report = service.report("domestic").unwrap();
    let row = &report.trades[0];

    // Full first lot (4) plus 3 of the second; the reported buy date is the
    // second lot's.
    assert_eq!(row.quantity, dec!(7));
    assert_eq!(row.buy_date, Some(date(2025, 2, 10)));
    // cost_with_fee: 400 + 0 fee, plus 3/6 of 720 + 0 fee = 760.
    assert_eq!(row.buy_unit_price.round_dp(6), (dec!(760) / dec!(7)).round_dp(6));
}

#[test]
fn each_sell_gets_its_own_row() {
    let service = service(vec![
        trade("069500", date(2025, 1, 10), TradeSide::Buy, dec!(10), dec!(1000)),
        trade("069500", date(2025, 1, 20), TradeSide::Sell, dec!(4), dec!(500)),
        trade("069500", date(2025, 2, 20), TradeSide::Sell, dec!(6), dec!(780)),
    ]);

    let report = service.report("domestic").unwrap();
    assert_eq!(report.trades.len(), 2);
    assert_eq!(report.trades[0].sell_date, date(2025, 1, 20));
    assert_eq!(report.trades[1].sell_date, date(2025, 2, 20));
    assert_eq!(
        report.total_profit,
        report.trades[0].profit + report.trades[1].profit
    );
}

#[test]
fn rows_are_ordered_by_sell_date_across_tickers() {
    let service = service(vec![
        trade("069500", date(2025, 1, 10), TradeSide::Buy, dec!(10), dec!(1000)),
        trade("114800", date(2025, 1, 10), TradeSide::Buy, dec!(10), dec!(1000)),
        trade("114800", date(2025, 2, 1), TradeSide::Sell, dec!(10), dec!(1100)),
        trade("069500", date(2025, 3, 1), TradeSide::Sell, dec!(10), dec!(1200)),
    ]);

    let report = service.report("domestic").unwrap();
    assert_eq!(report.trades.len(), 2);
    assert_eq!(report.trades[0].ticker, "114800");
    assert_eq!(report.trades[1].ticker, "069500");
}

#[test]
fn oversold_sell_charges_full_proceeds_against_the_matched_cost() {
    let service = service(vec![
        trade("069500", date(2025, 1, 10), TradeSide::Buy, dec!(5), dec!(500)),
        trade("069500", date(2025, 1, 20), TradeSide::Sell, dec!(8), dec!(800)),
    ]);

    let report = service.report("domestic").unwrap();
    let row = &report.trades[0];

    // Only the 5 open units match, but the sell's whole net proceeds
    // (fee floor(800 * 0.001) = 0) count toward the realized profit.
    assert_eq!(row.quantity, dec!(5));
    assert_eq!(row.sell_unit_price, dec!(160));
    assert_eq!(row.profit, dec!(300));
    assert_eq!(report.total_profit, dec!(300));
}

#[test]
fn zero_cost_basis_match_has_no_return_pct() {
    let service = service(vec![
        trade("069500", date(2025, 1, 10), TradeSide::Buy, dec!(5), dec!(0)),
        trade("069500", date(2025, 1, 20), TradeSide::Sell, dec!(5), dec!(100)),
    ]);

    let report = service.report("domestic").unwrap();
    let row = &report.trades[0];

    assert_eq!(row.quantity, dec!(5));
    assert_eq!(row.profit, dec!(100));
    assert_eq!(row.return_pct, None);
}

#[test]
fn sell_against_no_open_lots_produces_no_row() {
    let service = service(vec![trade(
        "069500",
        date(2025, 1, 20),
        TradeSide::Sell,
        dec!(4),
        dec!(500),
    )]);

    let report = service.report("domestic").unwrap();
    assert!(report.trades.is_empty());
    assert_eq!(report.total_profit, Decimal::ZERO);
}

#[test]
fn buys_alone_realize_nothing() {
    let service = service(vec![
        trade("069500", date(2025, 1, 10), TradeSide::Buy, dec!(10), dec!(1000)),
        trade("114800", date(2025, 1, 11), TradeSide::Buy, dec!(5), dec!(500)),
    ]);

    let report = service.report("domestic").unwrap();
    assert!(report.trades.is_empty());
}
