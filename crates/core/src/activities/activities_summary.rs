use rust_decimal::Decimal;

use super::activities_model::{
    Trade, TradeSide, TradeSummary, Transfer, TransferDirection, TransferSummary,
};

/// Buy/sell counts and volumes plus total fees. Missing numbers count as zero.
pub fn summarize_trades(trades: &[Trade]) -> TradeSummary {
    trades.iter().fold(TradeSummary::default(), |mut acc, trade| {
        let notional = trade.notional();
        match trade.side {
            TradeSide::Buy => {
                acc.buy_count += 1;
                acc.buy_volume = acc.buy_volume.saturating_add(notional);
            }
            TradeSide::Sell => {
                acc.sell_count += 1;
                acc.sell_volume = acc.sell_volume.saturating_add(notional);
            }
        }
        acc.total_fees = acc
            .total_fees
            .saturating_add(trade.fee.unwrap_or(Decimal::ZERO).abs());
        acc
    })
}

/// Deposited, withdrawn and net amounts. Missing amounts count as zero.
pub fn summarize_transfers(transfers: &[Transfer]) -> TransferSummary {
    let mut summary = transfers
        .iter()
        .fold(TransferSummary::default(), |mut acc, transfer| {
            let amount = transfer.amount.unwrap_or(Decimal::ZERO).abs();
            match transfer.direction {
                TransferDirection::Deposit => {
                    acc.deposit_count += 1;
                    acc.total_deposited = acc.total_deposited.saturating_add(amount);
                }
                TransferDirection::Withdrawal => {
                    acc.withdrawal_count += 1;
                    acc.total_withdrawn = acc.total_withdrawn.saturating_add(amount);
                }
            }
            acc
        });
    summary.net = summary.total_deposited.saturating_sub(summary.total_withdrawn);
    summary
}

pub fn trades_for_portfolio<'a>(trades: &'a [Trade], portfolio_id: &str) -> Vec<&'a Trade> {
    trades
        .iter()
        .filter(|t| t.portfolio_id == portfolio_id)
        .collect()
}

pub fn transfers_for_portfolio<'a>(
    transfers: &'a [Transfer],
    portfolio_id: &str,
) -> Vec<&'a Transfer> {
    transfers
        .iter()
        .filter(|t| t.portfolio_id == portfolio_id)
        .collect()
}
