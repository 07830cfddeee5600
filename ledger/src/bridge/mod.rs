//! Token bridge gateway.
//!
//! Moves value across a trust boundary in two one-way flows:
//!     * Deposit: an off-chain verifier attests that tokens were locked
//!       on the remote ledger and submits a payload under the depositor
//!       role; the gateway decodes it and mints to the named user.
//!     * Withdrawal: a holder burns their own balance as a signal; the
//!       matching release on the remote ledger is driven by an external
//!       observer of the burn events, never by this gateway.
//!
//! Each call is atomic: it either commits its full batch of mints or
//! burns, or fails with nothing written. The gateway keeps no state of
//! its own and provides no replay protection; a resubmitted deposit
//! payload mints again, so replay defense must live in the verifier that
//! gates the depositor role.

mod deposit;
mod error;
mod payload;
mod withdraw;

pub use deposit::*;
pub use error::*;
pub use payload::*;
pub use withdraw::*;
