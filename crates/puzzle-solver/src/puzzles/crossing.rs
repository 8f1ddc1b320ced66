//! Pups and wolves crossing a river.
//!
//! Every animal starts on the left bank with the boat. A wolf crosses
//! alone; pups cross one or two at a time. On the way back the boat may
//! also return empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;

/// River bank holding the boat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("LEFT"),
            Side::Right => f.write_str("RIGHT"),
        }
    }
}

/// Animals on one bank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bank {
    pub pups: u32,
    pub wolves: u32,
}

impl Bank {
    pub fn new(pups: u32, wolves: u32) -> Self {
        Self { pups, wolves }
    }

    pub fn is_empty(&self) -> bool {
        self.pups == 0 && self.wolves == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossingConfig {
    pub left: Bank,
    pub right: Bank,
    pub boat: Side,
}

impl CrossingConfig {
    /// Everyone on the left bank with the boat.
    pub fn new(pups: u32, wolves: u32) -> Self {
        Self {
            left: Bank::new(pups, wolves),
            right: Bank::default(),
            boat: Side::Left,
        }
    }

    fn ferry(&self, pups: u32, wolves: u32) -> Self {
        let (from, to) = match self.boat {
            Side::Left => (self.left, self.right),
            Side::Right => (self.right, self.left),
        };
        let from = Bank::new(from.pups - pups, from.wolves - wolves);
        let to = Bank::new(to.pups + pups, to.wolves + wolves);
        let (left, right) = match self.boat {
            Side::Left => (from, to),
            Side::Right => (to, from),
        };
        Self {
            left,
            right,
            boat: self.boat.opposite(),
        }
    }
}

impl Configuration for CrossingConfig {
    fn is_goal(&self) -> bool {
        self.left.is_empty()
    }

    fn neighbors(&self) -> Vec<Self> {
        let (bank, min_pups) = match self.boat {
            Side::Left => (self.left, 1),
            // The boat may come back empty
            Side::Right => (self.right, 0),
        };

        let mut neighbors = Vec::with_capacity(4);
        if bank.wolves >= 1 {
            neighbors.push(self.ferry(0, 1));
        }
        for pups in min_pups..=2 {
            if bank.pups >= pups {
                neighbors.push(self.ferry(pups, 0));
            }
        }
        neighbors
    }
}

impl fmt::Display for CrossingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left=[{}, {}], right=[{}, {}]  (BOAT: {})",
            self.left.pups, self.left.wolves, self.right.pups, self.right.wolves, self.boat
        )
    }
}
