pub mod desk;
pub mod form;
pub mod history;
pub mod stamp;

pub use desk::{Submission, SubmitError, TradeDesk};
pub use form::{InputError, TradeForm};
pub use history::TradeHistory;
pub use stamp::{Clock, IdGenerator, SystemClock, UuidGenerator};
