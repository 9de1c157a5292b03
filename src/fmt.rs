//! Logging shims.
//!
//! The driver logs through `defmt` when the `defmt` feature is enabled, through
//! `log` when the `log` feature is enabled, and otherwise not at all. Arguments
//! are still evaluated by reference in the silent build so call sites never
//! trigger unused-variable warnings.

#![allow(unused_macros)]

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        macro_rules! debug {
            ($s:literal $(, $x:expr)* $(,)?) => {
                ::defmt::debug!($s $(, $x)*)
            };
        }
        macro_rules! warn {
            ($s:literal $(, $x:expr)* $(,)?) => {
                ::defmt::warn!($s $(, $x)*)
            };
        }
        macro_rules! error {
            ($s:literal $(, $x:expr)* $(,)?) => {
                ::defmt::error!($s $(, $x)*)
            };
        }
    } else if #[cfg(feature = "log")] {
        macro_rules! debug {
            ($s:literal $(, $x:expr)* $(,)?) => {
                ::log::debug!($s $(, $x)*)
            };
        }
        macro_rules! warn {
            ($s:literal $(, $x:expr)* $(,)?) => {
                ::log::warn!($s $(, $x)*)
            };
        }
        macro_rules! error {
            ($s:literal $(, $x:expr)* $(,)?) => {
                ::log::error!($s $(, $x)*)
            };
        }
    } else {
        macro_rules! debug {
            ($s:literal $(, $x:expr)* $(,)?) => {{
                let _ = ($( & $x ),*);
            }};
        }
        macro_rules! warn {
            ($s:literal $(, $x:expr)* $(,)?) => {{
                let _ = ($( & $x ),*);
            }};
        }
        macro_rules! error {
            ($s:literal $(, $x:expr)* $(,)?) => {{
                let _ = ($( & $x ),*);
            }};
        }
    }
}
