//! Fixture types shared by the language suites.
//!
//! Suites define most demonstration types inline, next to the assertion
//! that uses them. The handful of types here are the ones several suites
//! share.

use std::fmt;
use std::ops::Add;

/// Plain record type used by the object, derive, and generics suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Newtype with overloaded operators, used by the derive and generics suites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Meters(pub f64);

impl Add for Meters {
    type Output = Meters;

    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

/// Trait with a default method, used by the trait and generics suites.
pub trait Speak {
    fn name(&self) -> String;

    fn greeting(&self) -> String {
        format!("hello, {}", self.name())
    }
}

pub struct Dog;

impl Speak for Dog {
    fn name(&self) -> String {
        "dog".to_string()
    }
}

pub struct Robot {
    pub id: u32,
}

impl Speak for Robot {
    fn name(&self) -> String {
        format!("robot-{}", self.id)
    }

    // overrides the default
    fn greeting(&self) -> String {
        format!("BEEP {}", self.id)
    }
}
