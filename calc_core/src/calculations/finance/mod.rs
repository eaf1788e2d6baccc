//! Finance calculators: interest, loans, savings, everyday money and two
//! simplified legal estimates.

pub mod cd_ladder;
pub mod child_support;
pub mod compound_interest;
pub mod hourly_wage;
pub mod inflation;
pub mod loan_payment;
pub mod roi;
pub mod sales_tax;
pub mod simple_interest;
pub mod tip;
pub mod waspi;
