//! Zero-cost newtypes over the physical quantities the kernel operates on.
//!
//! Every field in [`crate::kernel::types`] that carries a unit is one of
//! these instead of a bare `f64`, so that mixing e.g. millimetres and
//! millimetres-per-hour is a type error rather than a silent bug.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

macro_rules! unit {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        pub struct $name(pub f64);

        impl $name {
            pub fn get(self) -> f64 {
                self.0
            }

            pub fn clamp(self, min: f64, max: f64) -> Self {
                Self(self.0.clamp(min, max))
            }

            pub fn max(self, other: f64) -> Self {
                Self(self.0.max(other))
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self(value)
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                Self(self.0 / rhs)
            }
        }
    };
}

unit!(Millimeters);
unit!(MmPerHour);
unit!(LitresPerMinute);
unit!(SquareMetres);
unit!(Metres);
unit!(Minutes);

impl Div<MmPerHour> for Millimeters {
    type Output = f64;
    /// hours needed to apply this depth at the given rate
    fn div(self, rhs: MmPerHour) -> f64 {
        self.0 / rhs.0
    }
}
