/// Chat classification
///
/// Turns raw formatted chat lines into semantic tokens and transfer
/// signals. Classification is stateless; everything stateful lives in the
/// phase detector and the match tracker.

pub mod chat;
pub mod token;
pub mod transfer;

pub use chat::ChatClassifier;
pub use token::{ChatToken, TeamUpgrade};
pub use transfer::{TransferDetector, TransferSignal};
