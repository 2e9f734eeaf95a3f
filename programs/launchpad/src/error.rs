//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    // Authorization errors
    #[msg("Only the product maker or bid owner can perform this action")]
    UnauthorizedAccess,

    #[msg("Bid does not belong to this product")]
    InvalidProduct,

    #[msg("Token mint does not match the product")]
    InvalidTokenMint,

    #[msg("Token pool does not match the product")]
    InvalidTokenPool,

    #[msg("Administrator must be a real account")]
    InvalidAdministrator,

    // State errors
    #[msg("Protocol is already initialized")]
    AlreadyInitialized,

    #[msg("Maker already has a launched product")]
    ProductAlreadyExists,

    #[msg("Bidder already has a bid on this product")]
    BidAlreadyExists,

    #[msg("Bid has already been processed")]
    BidAlreadyProcessed,

    #[msg("Product is not in bidding phase")]
    NotInBiddingPhase,

    #[msg("Product is still open for bidding")]
    BiddingStillOpen,

    #[msg("Bid is not approved")]
    BidNotApproved,

    #[msg("Tokens already claimed")]
    AlreadyClaimed,

    #[msg("Funds already claimed")]
    FundsAlreadyClaimed,

    // Constraint errors
    #[msg("Bid amount must be greater than zero")]
    ZeroBidAmount,

    #[msg("Bid must request at least one slot")]
    ZeroSlotsRequested,

    #[msg("Requested slots exceed the product's slot capacity")]
    SlotsExceedCapacity,

    #[msg("Slot capacity must be greater than zero")]
    ZeroSlotCapacity,

    #[msg("Token supply must be greater than zero")]
    ZeroTokenSupply,

    #[msg("Initial deposit is below the minimum launch deposit")]
    InsufficientDeposit,

    #[msg("Launch date must be in the future")]
    InvalidLaunchDate,

    #[msg("Product name is too long")]
    NameTooLong,

    #[msg("Product description is too long")]
    DescriptionTooLong,

    #[msg("Token symbol must be 1-10 uppercase letters or digits")]
    InvalidTokenSymbol,

    #[msg("Bidding period has ended")]
    BiddingClosed,

    #[msg("Not enough slots remaining to approve this bid")]
    InsufficientSlotCapacity,

    #[msg("Launch date has not arrived yet")]
    LaunchDateNotReached,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // Resource errors
    #[msg("Escrow balance does not cover the requested transfer")]
    InsufficientEscrowBalance,
}
