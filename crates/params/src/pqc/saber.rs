//! Constants for SABER key encapsulation mechanism

use core::fmt;
use core::str::FromStr;

/// SABER polynomial degree
pub const SABER_N: usize = 256;

/// log2 of the SABER modulus q
pub const SABER_EQ: u32 = 13;

/// log2 of the SABER rounding modulus p
pub const SABER_EP: u32 = 10;

/// Default width of the centered binomial secret distribution
pub const SABER_MU: u32 = 4;

/// Size of the public matrix seed in bytes
pub const SABER_SEEDBYTES: usize = 32;

/// Size of the secret noise seed in bytes
pub const SABER_NOISE_SEEDBYTES: usize = 32;

/// Size of messages, session keys and the rejection value `z`
pub const SABER_KEYBYTES: usize = 32;

/// Size of the public key hash stored in the CCA secret key
pub const SABER_HASHBYTES: usize = 32;

/// The three canonical SABER security levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// LightSaber, module rank 2
    #[cfg_attr(feature = "serde", serde(rename = "light"))]
    LightSaber,
    /// Saber, module rank 3
    #[cfg_attr(feature = "serde", serde(rename = "default"))]
    Saber,
    /// FireSaber, module rank 4
    #[cfg_attr(feature = "serde", serde(rename = "fire"))]
    FireSaber,
}

impl Variant {
    /// All variants, lowest security level first
    pub const ALL: [Variant; 3] = [Variant::LightSaber, Variant::Saber, Variant::FireSaber];

    /// Short name as accepted on the command line
    pub const fn as_str(&self) -> &'static str {
        match self {
            Variant::LightSaber => "light",
            Variant::Saber => "default",
            Variant::FireSaber => "fire",
        }
    }

    /// The parameter set for this variant
    pub const fn params(&self) -> &'static ParameterSet {
        match self {
            Variant::LightSaber => &LIGHTSABER,
            Variant::Saber => &SABER,
            Variant::FireSaber => &FIRESABER,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Variant::LightSaber),
            "default" => Ok(Variant::Saber),
            "fire" => Ok(Variant::FireSaber),
            _ => Err(ParamError::UnknownVariant),
        }
    }
}

/// Error raised while selecting or adjusting a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// Variant name is not one of `light`, `default`, `fire`
    UnknownVariant,
    /// MU override rejected
    InvalidMu {
        /// Value supplied
        mu: u32,
        /// Why it was rejected
        reason: &'static str,
    },
    /// A derived size disagrees with the primary parameters
    Inconsistent {
        /// Name of the offending field
        field: &'static str,
        /// Value derived from the primary parameters
        expected: usize,
        /// Value carried by the set
        actual: usize,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::UnknownVariant => {
                write!(f, "unknown SABER variant (expected light, default or fire)")
            }
            ParamError::InvalidMu { mu, reason } => write!(f, "invalid MU {}: {}", mu, reason),
            ParamError::Inconsistent {
                field,
                expected,
                actual,
            } => write!(
                f,
                "inconsistent parameter {}: expected {}, got {}",
                field, expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParamError {}

/// Immutable bundle of SABER parameters
///
/// The moduli are powers of two and are stored as their exponents:
/// q = 2^`eq`, p = 2^`ep`, t = 2^`et`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    /// Which canonical set this is (or was derived from)
    pub variant: Variant,

    /// Polynomial degree
    pub n: usize,

    /// Module rank
    pub l: usize,

    /// log2 of the modulus q
    pub eq: u32,

    /// log2 of the rounding modulus p
    pub ep: u32,

    /// log2 of the ciphertext modulus t
    pub et: u32,

    /// Secret distribution width (even)
    pub mu: u32,

    /// Public matrix seed size in bytes
    pub seed_bytes: usize,

    /// Secret noise seed size in bytes
    pub noise_seed_bytes: usize,

    /// Message / session key size in bytes
    pub key_bytes: usize,

    /// Public key hash size in bytes
    pub hash_bytes: usize,

    /// CPA public key size in bytes
    pub indcpa_public_key_bytes: usize,

    /// CPA secret key size in bytes
    pub indcpa_secret_key_bytes: usize,

    /// KEM public key size in bytes
    pub public_key_bytes: usize,

    /// KEM secret key size in bytes
    pub secret_key_bytes: usize,

    /// Ciphertext size in bytes
    pub ciphertext_bytes: usize,
}

/// LightSABER parameters (NIST level 1)
pub const LIGHTSABER: ParameterSet = ParameterSet {
    variant: Variant::LightSaber,
    n: SABER_N,
    l: 2,
    eq: SABER_EQ,
    ep: SABER_EP,
    et: 3,
    mu: SABER_MU,
    seed_bytes: SABER_SEEDBYTES,
    noise_seed_bytes: SABER_NOISE_SEEDBYTES,
    key_bytes: SABER_KEYBYTES,
    hash_bytes: SABER_HASHBYTES,
    indcpa_public_key_bytes: 672,
    indcpa_secret_key_bytes: 832,
    public_key_bytes: 672,
    secret_key_bytes: 1568,
    ciphertext_bytes: 736,
};

/// SABER parameters (NIST level 3)
pub const SABER: ParameterSet = ParameterSet {
    variant: Variant::Saber,
    n: SABER_N,
    l: 3,
    eq: SABER_EQ,
    ep: SABER_EP,
    et: 4,
    mu: SABER_MU,
    seed_bytes: SABER_SEEDBYTES,
    noise_seed_bytes: SABER_NOISE_SEEDBYTES,
    key_bytes: SABER_KEYBYTES,
    hash_bytes: SABER_HASHBYTES,
    indcpa_public_key_bytes: 992,
    indcpa_secret_key_bytes: 1248,
    public_key_bytes: 992,
    secret_key_bytes: 2304,
    ciphertext_bytes: 1088,
};

/// FireSABER parameters (NIST level 5)
pub const FIRESABER: ParameterSet = ParameterSet {
    variant: Variant::FireSaber,
    n: SABER_N,
    l: 4,
    eq: SABER_EQ,
    ep: SABER_EP,
    et: 6,
    mu: SABER_MU,
    seed_bytes: SABER_SEEDBYTES,
    noise_seed_bytes: SABER_NOISE_SEEDBYTES,
    key_bytes: SABER_KEYBYTES,
    hash_bytes: SABER_HASHBYTES,
    indcpa_public_key_bytes: 1312,
    indcpa_secret_key_bytes: 1664,
    public_key_bytes: 1312,
    secret_key_bytes: 3040,
    ciphertext_bytes: 1472,
};

impl ParameterSet {
    /// Display name of the set
    pub const fn name(&self) -> &'static str {
        match self.variant {
            Variant::LightSaber => "LightSaber",
            Variant::Saber => "Saber",
            Variant::FireSaber => "FireSaber",
        }
    }

    /// Modulus q
    pub const fn q(&self) -> u32 {
        1 << self.eq
    }

    /// Rounding modulus p
    pub const fn p(&self) -> u32 {
        1 << self.ep
    }

    /// Ciphertext modulus t
    pub const fn t(&self) -> u32 {
        1 << self.et
    }

    /// Byte length of the `c_m` part of a ciphertext
    pub const fn cm_bytes(&self) -> usize {
        self.n * self.et as usize / 8
    }

    /// Copy of this set with a different secret distribution width
    ///
    /// MU must be a non-zero even number below 2^EP.
    pub fn with_mu(&self, mu: u32) -> Result<Self, ParamError> {
        check_mu(mu, self.ep)?;
        Ok(Self { mu, ..*self })
    }

    /// Check that every derived byte length agrees with the primary parameters
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.et == 0 || self.et >= self.ep || self.ep >= self.eq || self.eq >= 32 {
            return Err(ParamError::Inconsistent {
                field: "0 < et < ep < eq < 32",
                expected: self.eq as usize,
                actual: self.ep as usize,
            });
        }
        check_mu(self.mu, self.ep)?;

        let ring_bytes = |bits: u32| self.l * self.n * bits as usize / 8;

        let indcpa_pk = self.seed_bytes + ring_bytes(self.ep);
        let indcpa_sk = ring_bytes(self.eq);
        let sk = self.key_bytes + self.hash_bytes + indcpa_pk + indcpa_sk;
        let ct = self.cm_bytes() + ring_bytes(self.ep);

        consistent("n", SABER_N, self.n)?;
        consistent("seed_bytes", SABER_SEEDBYTES, self.seed_bytes)?;
        consistent("noise_seed_bytes", SABER_NOISE_SEEDBYTES, self.noise_seed_bytes)?;
        consistent("key_bytes", SABER_KEYBYTES, self.key_bytes)?;
        consistent("hash_bytes", SABER_HASHBYTES, self.hash_bytes)?;
        consistent("indcpa_public_key_bytes", indcpa_pk, self.indcpa_public_key_bytes)?;
        consistent("indcpa_secret_key_bytes", indcpa_sk, self.indcpa_secret_key_bytes)?;
        consistent("public_key_bytes", indcpa_pk, self.public_key_bytes)?;
        consistent("secret_key_bytes", sk, self.secret_key_bytes)?;
        consistent("ciphertext_bytes", ct, self.ciphertext_bytes)?;

        Ok(())
    }
}

fn check_mu(mu: u32, ep: u32) -> Result<(), ParamError> {
    if mu == 0 {
        return Err(ParamError::InvalidMu {
            mu,
            reason: "must be positive",
        });
    }
    if mu % 2 != 0 {
        return Err(ParamError::InvalidMu {
            mu,
            reason: "must be even",
        });
    }
    if mu >= 1 << ep {
        return Err(ParamError::InvalidMu {
            mu,
            reason: "must be below 2^EP",
        });
    }
    Ok(())
}

fn consistent(field: &'static str, expected: usize, actual: usize) -> Result<(), ParamError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ParamError::Inconsistent {
            field,
            expected,
            actual,
        })
    }
}
