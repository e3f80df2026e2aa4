// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ops implementation.
//!
//! Addition and subtraction are total: results grow as needed, so there is
//! no overflow and no `checked_*` variants.

use crate::decimal::Decimal;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Add<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, other: &Decimal) -> Self::Output {
        if self.negative != other.negative {
            self.sub_internal(other, self.negative)
        } else {
            self.add_internal(other, self.negative)
        }
    }
}

impl Sub<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, other: &Decimal) -> Self::Output {
        if self.negative != other.negative {
            self.add_internal(other, self.negative)
        } else {
            self.sub_internal(other, self.negative)
        }
    }
}

macro_rules! impl_arith {
    ($op: ident { $method: ident }) => {
        impl $op for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: Self) -> Self::Output {
                (&self).$method(&other)
            }
        }

        impl $op<&'_ Decimal> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: &Decimal) -> Self::Output {
                (&self).$method(other)
            }
        }

        impl $op<Decimal> for &'_ Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: Decimal) -> Self::Output {
                self.$method(&other)
            }
        }

        impl_arith_with_num!($op { $method } u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    };
}

macro_rules! impl_arith_with_num {
    ($op: ident { $method: ident } $int: ty) => {
        impl $op<$int> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: $int) -> Self::Output {
                (&self).$method(&Decimal::from(other))
            }
        }

        impl $op<$int> for &'_ Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: $int) -> Self::Output {
                self.$method(&Decimal::from(other))
            }
        }

        impl $op<Decimal> for $int {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: Decimal) -> Self::Output {
                (&Decimal::from(self)).$method(&other)
            }
        }

        impl $op<&'_ Decimal> for $int {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: &'_ Decimal) -> Self::Output {
                (&Decimal::from(self)).$method(other)
            }
        }
    };
    ($op: ident { $method: ident } $($int: ty), * $(,)?) => {
        $(impl_arith_with_num!($op { $method } $int);)*
    };
}

impl_arith!(Add { add });
impl_arith!(Sub { sub });

macro_rules! impl_arith_assign {
    ($op: ident { $method: ident } { $base: ident }) => {
        impl $op for Decimal {
            #[inline]
            fn $method(&mut self, other: Decimal) {
                *self = (&*self).$base(&other);
            }
        }

        impl $op<&'_ Decimal> for Decimal {
            #[inline]
            fn $method(&mut self, other: &Decimal) {
                *self = (&*self).$base(other);
            }
        }
    };
}

impl_arith_assign!(AddAssign { add_assign } { add });
impl_arith_assign!(SubAssign { sub_assign } { sub });

impl Sum for Decimal {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), Add::add)
    }
}
