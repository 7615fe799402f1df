// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::{self, Debug, Display}, ops::{Add, Mul}, str::FromStr};


pub(crate) trait IntNum: Clone + Default + Debug + Display + From<bool>
	+ PartialEq<Self> + PartialOrd<Self>
	+ Add<Self, Output = Self> + Mul<Self, Output = Self> {
	fn parse(s: &str) -> Option<Self>;
	fn from_i64(num: i64) -> Self;
	/// `None` if out of range; used for opcodes, addresses and offsets.
	fn to_i64(&self) -> Option<i64>;
}

impl IntNum for i64 {
	fn parse(s: &str) -> Option<Self> {
		s.parse().ok()
	}

	fn from_i64(num: i64) -> Self {
		num
	}

	fn to_i64(&self) -> Option<i64> {
		Some(*self)
	}
}


#[derive(Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct BigNum(pub(crate) num_bigint::BigInt);

impl From<bool> for BigNum {
	fn from(b: bool) -> Self {
		Self(num_bigint::BigInt::from(u8::from(b)))
	}
}

impl Add<BigNum> for BigNum {
	type Output = BigNum;
	fn add(self, rhs: BigNum) -> Self::Output {
		Self(self.0 + rhs.0)
	}
}

impl Mul<BigNum> for BigNum {
	type Output = BigNum;
	fn mul(self, rhs: BigNum) -> Self::Output {
		Self(self.0 * rhs.0)
	}
}

impl Display for BigNum {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl IntNum for BigNum {
	fn parse(s: &str) -> Option<Self> {
		num_bigint::BigInt::from_str(s).ok().map(Self)
	}

	fn from_i64(num: i64) -> Self {
		Self(num_bigint::BigInt::from(num))
	}

	fn to_i64(&self) -> Option<i64> {
		i64::try_from(&self.0).ok()
	}
}


#[test]
fn tests() {
	let big = BigNum::parse("34915192").unwrap();
	assert_eq!((big.clone() * big).to_string(), "1219070632396864");
	let huge = BigNum::parse("-99999999999999999999").unwrap();
	assert_eq!(huge.to_i64(), None);
	assert_eq!(format!("{:+}", BigNum::from_i64(7)), "+7");
	assert_eq!(BigNum::from(true), BigNum::from_i64(1));
	assert!(BigNum::from_i64(-3) < BigNum::default());
	assert_eq!(<i64 as IntNum>::parse("x"), None);
}
