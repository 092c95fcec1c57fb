mod catalog;
mod combination;
mod order;

#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use catalog::PackSize;
#[doc(inline)]
pub use combination::Combination;
#[doc(inline)]
pub use order::Order;
#[doc(inline)]
pub use order::Solution;
