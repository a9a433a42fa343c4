//! Order flow: cart building, checkout, receipts

pub mod cart;
pub mod receipt;
pub mod session;

// Re-exports
pub use cart::{Cart, CartError, CartLine};
pub use receipt::{Receipt, ReceiptLine};
pub use session::{CheckoutError, OrderSession, Totals};
