/// Calculate the blended redemption price
///
/// Formula: payout = cost + (sale - cost) / 2
///
/// The halving truncates toward zero, so an odd spread leaves the
/// redeemer one smallest currency unit short per token.
///
/// Example:
/// - cost: 1.0 USDC (1_000_000), sale: 2.0 USDC (2_000_000)
/// - payout: 1_000_000 + 1_000_000 / 2 = 1_500_000
pub fn calculate_payout_per_token(cost_per_token: i128, sale_per_unit: i128) -> Option<i128> {
    let spread = sale_per_unit.checked_sub(cost_per_token)?;
    cost_per_token.checked_add(spread.checked_div(2)?)
}

/// Calculate the currency owed for `amount` whole units
///
/// Formula: total = amount × price_per_token
pub fn calculate_total(amount: i128, price_per_token: i128) -> Option<i128> {
    amount.checked_mul(price_per_token)
}
