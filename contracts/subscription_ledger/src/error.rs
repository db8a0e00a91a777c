use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller does not hold the required role
    Unauthorized = 10,
    /// Account is not on the whitelist
    NotWhitelisted = 11,

    // ============================================
    // PHASE ERRORS (20-29)
    // ============================================
    /// Subscription window has not opened yet
    TooEarly = 20,
    /// Subscription window is over
    SubscriptionClosed = 21,
    /// Units cannot move or be redeemed before unlock
    TransfersLocked = 22,

    // ============================================
    // AMOUNT/BALANCE ERRORS (30-39)
    // ============================================
    /// Amount must be positive and must not overflow
    InvalidAmount = 30,
    /// Holder doesn't have enough units
    InsufficientBalance = 31,
    /// Revenue pool cannot cover the redemption payout
    InsufficientRevenuePool = 32,
    /// Withdrawal exceeds the collected cost bucket
    InsufficientCollectedCost = 33,
    /// Spender allowance too small
    InsufficientAllowance = 34,

    // ============================================
    // CURRENCY ERRORS (40-49)
    // ============================================
    /// Currency contract denied the transfer
    CurrencyTransferFailed = 40,

    // ============================================
    // CONFIGURATION ERRORS (50-59)
    // ============================================
    /// start <= subscription end <= unlock must hold
    InvalidTimestamp = 50,
    /// Prices must be positive and cost <= sale
    InvalidPrice = 51,

    // ============================================
    // OPERATIONAL ERRORS (60-69)
    // ============================================
    /// Contract is paused
    Paused = 60,
}
