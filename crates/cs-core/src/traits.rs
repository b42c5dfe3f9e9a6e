//! Categorical agent traits and their fixed probability tables.
//!
//! Each trait is a closed enum parsed from the exact roster string
//! (`"lazy"`, `"n95"`, `"pfizer/moderna"`, …).  Unknown strings are a
//! configuration error; they are never silently defaulted.
//!
//! | Trait       | Values → number                                                     |
//! |-------------|----------------------------------------------------------------------|
//! | `Style`     | lazy 0.2, neutral 0.5, smart 0.8                                     |
//! | `Behaviour` | quiet 0.2, active 0.8 (chance of leaving the desk on a break)        |
//! | `Mask`      | no-mask 0, cloth 0.3, surgical 0.5, n95 0.85 (filter efficacy)       |
//! | `Vaccine`   | no-vax 0, any 0.31, astra-zeneca 0.67, pfizer/moderna 0.88 (efficacy)|

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Define a closed trait enum with its roster spelling and lookup value.
macro_rules! trait_table {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident as $kind:literal {
            $( $variant:ident => ($text:literal, $value:expr) ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The value from the fixed lookup table.
            #[inline]
            pub fn value(self) -> f64 {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            /// The spelling used in agent rosters.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(CoreError::InvalidTrait {
                        kind:  $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

trait_table! {
    /// Study style.  Drives how often the teacher works at the whiteboard.
    pub enum Style as "style" {
        Lazy    => ("lazy",    0.2),
        Neutral => ("neutral", 0.5),
        Smart   => ("smart",   0.8),
    }
}

trait_table! {
    /// Social behaviour; the value is the chance of leaving the desk on a break.
    pub enum Behaviour as "behaviour" {
        Quiet  => ("quiet",  0.2),
        Active => ("active", 0.8),
    }
}

trait_table! {
    /// Face covering; the value is the fraction of droplets filtered.
    pub enum Mask as "mask" {
        NoMask   => ("no-mask",  0.0),
        Cloth    => ("cloth",    0.3),
        Surgical => ("surgical", 0.5),
        N95      => ("n95",      0.85),
    }
}

trait_table! {
    /// Vaccination; the value is the relative reduction of infection chance.
    pub enum Vaccine as "vaccine" {
        NoVax        => ("no-vax",         0.0),
        Any          => ("any",            0.31),
        AstraZeneca  => ("astra-zeneca",   0.67),
        PfizerModerna => ("pfizer/moderna", 0.88),
    }
}

// ── AgentTraits ───────────────────────────────────────────────────────────────

/// The four immutable categorical traits of an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentTraits {
    pub style:     Style,
    pub behaviour: Behaviour,
    pub mask:      Mask,
    pub vaccine:   Vaccine,
}

impl AgentTraits {
    /// Validate the four roster strings.  The first invalid one is reported.
    pub fn parse(style: &str, behaviour: &str, mask: &str, vaccine: &str) -> CoreResult<Self> {
        Ok(Self {
            style:     style.parse()?,
            behaviour: behaviour.parse()?,
            mask:      mask.parse()?,
            vaccine:   vaccine.parse()?,
        })
    }

    /// Fraction of droplets that pass through the mask.
    #[inline]
    pub fn mask_pass_through(&self) -> f64 {
        1.0 - self.mask.value()
    }

    /// Fraction of the raw infection probability left after vaccination.
    #[inline]
    pub fn vaccine_pass_through(&self) -> f64 {
        1.0 - self.vaccine.value()
    }
}

impl Default for AgentTraits {
    /// The roster defaults: lazy, quiet, no mask, not vaccinated.
    fn default() -> Self {
        Self {
            style:     Style::Lazy,
            behaviour: Behaviour::Quiet,
            mask:      Mask::NoMask,
            vaccine:   Vaccine::NoVax,
        }
    }
}
