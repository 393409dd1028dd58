//! SHAKE-128 extendable output function (FIPS 202)

use ::sha3::digest::{ExtendableOutput, Update, XofReader};
use ::sha3::{Shake128, Shake128Reader};

use super::{ExtendableOutputFunction, Shake128Algorithm, XofAlgorithm};
use crate::error::{Error, Result};

enum State {
    Absorbing(Shake128),
    Squeezing(Shake128Reader),
}

/// SHAKE-128 extendable output function
///
/// Absorb with `update`, then squeeze any number of bytes. The first call
/// to `squeeze` (or an explicit `finalize`) closes the absorbing phase.
pub struct ShakeXof128 {
    state: State,
}

impl ShakeXof128 {
    /// Algorithm identifier
    pub fn name() -> &'static str {
        Shake128Algorithm::ALGORITHM_ID
    }

    fn ensure_squeezing(&mut self) {
        if let State::Absorbing(hasher) = &self.state {
            let reader = hasher.clone().finalize_xof();
            self.state = State::Squeezing(reader);
        }
    }
}

impl ExtendableOutputFunction for ShakeXof128 {
    fn new() -> Self {
        Self {
            state: State::Absorbing(Shake128::default()),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        match &mut self.state {
            State::Absorbing(hasher) => {
                hasher.update(data);
                Ok(())
            }
            State::Squeezing(_) => Err(Error::xof_finalized()),
        }
    }

    fn finalize(&mut self) -> Result<()> {
        self.ensure_squeezing();
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.ensure_squeezing();
        match &mut self.state {
            State::Squeezing(reader) => {
                reader.read(output);
                Ok(())
            }
            State::Absorbing(_) => Err(Error::Processing {
                operation: "SHAKE-128",
                details: "squeeze before finalization",
            }),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.state = State::Absorbing(Shake128::default());
        Ok(())
    }

    fn security_level() -> usize {
        Shake128Algorithm::SECURITY_LEVEL
    }
}
