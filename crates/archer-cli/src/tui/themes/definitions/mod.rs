mod archer;
mod phosphor;
mod terminal;

pub use archer::archer;
pub use phosphor::phosphor;
pub use terminal::terminal;
