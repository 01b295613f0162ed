//! Core value rules shared by every other module

pub mod money;

pub use money::{
    format_cents_to_dollars, format_signed_cents, parse_dollars_to_cents,
    parse_non_negative_cents, MoneyError, CENTS_PER_DOLLAR,
};
