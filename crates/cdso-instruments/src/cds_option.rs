//! CDS option contract terms.
//!
//! A CDS option gives the holder the right, at `cds_start`, to enter a
//! credit default swap running to `cds_end` at the pre-agreed `strike`
//! spread. The premium leg pays semiannually; the accrual grid and the
//! last-payment lookup `beta(u)` live here so pricing engines can stay
//! purely numerical.

use cdso_core::{ensure, Error, OptionType, Real, Result, Time};

/// Which side of the underlying swap the option holder would take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdsOptionSide {
    /// Right to buy protection (pay the strike spread).
    Payer,
    /// Right to sell protection (receive the strike spread).
    Receiver,
}

/// Contract terms of a CDS option on a semiannual-premium swap.
#[derive(Debug, Clone)]
pub struct CdsOptionParams {
    /// Option expiry and start of the underlying swap.
    pub cds_start: Time,
    /// Maturity of the underlying swap's protection.
    pub cds_end: Time,
    /// Strike spread of the underlying swap.
    pub strike: Real,
    /// Contract notional.
    pub notional: Real,
    /// Payer or receiver.
    pub side: CdsOptionSide,
    payment_times: Vec<Time>,
}

impl CdsOptionParams {
    /// Build contract terms, laying out the semiannual premium grid
    /// `cds_start, cds_start + 0.5, ...` covering `[cds_start, cds_end]`.
    pub fn new(
        cds_start: Time,
        cds_end: Time,
        strike: Real,
        notional: Real,
        side: CdsOptionSide,
    ) -> Result<Self> {
        if cds_start >= cds_end {
            return Err(Error::InvalidInstrumentWindow {
                start: cds_start,
                end: cds_end,
            });
        }
        ensure!(cds_start >= 0.0, "cds_start must be non-negative, got {cds_start}");
        ensure!(strike > 0.0, "strike spread must be positive, got {strike}");
        ensure!(notional > 0.0, "notional must be positive, got {notional}");

        let periods = ((cds_end - cds_start) / 0.5 - 1e-12).ceil() as usize;
        let payment_times = (0..=periods)
            .map(|i| cds_start + 0.5 * i as Real)
            .collect();

        Ok(Self {
            cds_start,
            cds_end,
            strike,
            notional,
            side,
            payment_times,
        })
    }

    /// The semiannual premium payment grid, starting at `cds_start`.
    pub fn payment_times(&self) -> &[Time] {
        &self.payment_times
    }

    /// Latest premium payment time at or before `u`.
    ///
    /// Used for the accrued-premium term `(u - beta(u))` in the default leg.
    /// `u` at or before `cds_start` maps to `cds_start`.
    pub fn beta(&self, u: Time) -> Time {
        let idx = self
            .payment_times
            .partition_point(|&g| g <= u + 1e-14);
        if idx == 0 {
            self.cds_start
        } else {
            self.payment_times[idx - 1]
        }
    }

    /// The bond-option type the swaption maps to: a payer exercises when
    /// intensity is high (bond put), a receiver when it is low (bond call).
    pub fn calc_option_type(&self) -> OptionType {
        match self.side {
            CdsOptionSide::Payer => OptionType::Put,
            CdsOptionSide::Receiver => OptionType::Call,
        }
    }
}
