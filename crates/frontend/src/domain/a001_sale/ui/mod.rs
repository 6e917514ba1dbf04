pub mod list;

pub use list::SaleList;
