//! Implementations for the simulation state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;

// Internal
use crate::{
    error::SimError,
    params::SimParams,
    path_gen::ReferencePoint,
    steer_ctrl::{is_rate_limited, rate_limit, SteerCtrl},
    vehicle::{VehicleModel, VehicleState},
};
use util::module::State;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Trajectory simulation state.
///
/// Owns the evolving vehicle state and the previously applied steering
/// command, and is the only thing which mutates them.
#[derive(Debug, Default)]
pub struct TrajSim {
    params: SimParams,

    /// The vehicle model and controller, `None` until initialised
    modules: Option<(VehicleModel, SteerCtrl)>,

    state: VehicleState,

    prev_steer_rad: f64,

    /// Index of the next step to be taken
    step: usize,
}

/// Output of a single simulation step.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct StepOutput {
    /// The vehicle state after the step.
    pub state: VehicleState,

    /// The steering command applied during the step.
    ///
    /// Units: radians
    pub steer_rad: f64,
}

/// Status report for a single simulation step.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct StepReport {
    /// Index of the step
    pub step: usize,

    /// Steering demand before rate limiting
    pub raw_steer_rad: f64,

    /// True if the rate limiter changed the raw demand
    pub rate_limited: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for TrajSim {
    type InitData = SimParams;
    type InitError = SimError;

    type InputData = ReferencePoint;
    type OutputData = StepOutput;
    type StatusReport = StepReport;
    type ProcError = SimError;

    /// Initialise the simulation.
    ///
    /// Validates the parameters and resets the vehicle to the initial state
    /// with zero steering.
    fn init(&mut self, init_data: Self::InitData) -> Result<(), Self::InitError> {
        init_data.validate()?;

        let model = VehicleModel::new(init_data.wheelbase_m)?;
        let ctrl = SteerCtrl::new(init_data.wheelbase_m, init_data.lookahead_distance_m)?;

        self.modules = Some((model, ctrl));
        self.state = init_data.initial_state;
        self.prev_steer_rad = 0.0;
        self.step = 0;
        self.params = init_data;

        Ok(())
    }

    /// Take one step towards the given reference sample.
    fn proc(
        &mut self,
        input_data: &Self::InputData,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> {
        let (model, ctrl) = self.modules.ok_or(SimError::NotInitialised)?;

        let raw_steer_rad = ctrl.compute_raw_command(&self.state, input_data);
        let steer_rad = rate_limit(
            self.prev_steer_rad,
            raw_steer_rad,
            self.params.max_steer_rate_rad,
        );

        if !steer_rad.is_finite() {
            return Err(SimError::NumericDomain {
                step: self.step,
                quantity: "steering command",
            });
        }

        let state = model.step(&self.state, steer_rad, self.params.time_step_s);

        if !state.is_finite() {
            return Err(SimError::NumericDomain {
                step: self.step,
                quantity: "vehicle state",
            });
        }

        let report = StepReport {
            step: self.step,
            raw_steer_rad,
            rate_limited: is_rate_limited(
                self.prev_steer_rad,
                raw_steer_rad,
                self.params.max_steer_rate_rad,
            ),
        };

        trace!(
            "Step {}: target ({:.3}, {:.3}), raw {:.4} rad, applied {:.4} rad, state {:?}",
            self.step,
            input_data.x,
            input_data.y,
            raw_steer_rad,
            steer_rad,
            state
        );

        self.state = state;
        self.prev_steer_rad = steer_rad;
        self.step += 1;

        Ok((StepOutput { state, steer_rad }, report))
    }
}

impl TrajSim {
    /// Current state of the vehicle.
    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    /// The steering command applied on the last step.
    pub fn prev_steer_rad(&self) -> f64 {
        self.prev_steer_rad
    }

    /// Number of steps taken since initialisation.
    pub fn num_steps(&self) -> usize {
        self.step
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn test_proc_before_init() {
        let mut sim = TrajSim::default();

        assert!(matches!(
            sim.proc(&Point2::new(1.0, 0.0)),
            Err(SimError::NotInitialised)
        ));
    }

    #[test]
    fn test_init_rejects_bad_params() {
        let mut sim = TrajSim::default();
        let params = SimParams {
            time_step_s: 0.0,
            ..SimParams::default()
        };

        assert!(sim.init(params).is_err());
        assert!(matches!(
            sim.proc(&Point2::new(1.0, 0.0)),
            Err(SimError::NotInitialised)
        ));
    }

    #[test]
    fn test_steps_thread_state() {
        let mut sim = TrajSim::default();
        sim.init(SimParams::default()).unwrap();

        // A target far to the left saturates the rate limiter
        let (out, report) = sim.proc(&Point2::new(0.0, 10.0)).unwrap();
        assert_eq!(report.step, 0);
        assert!(report.rate_limited);
        assert!(report.raw_steer_rad > 0.5);
        assert_eq!(out.steer_rad, 0.5);
        assert_eq!(sim.prev_steer_rad(), 0.5);
        assert_eq!(sim.state(), &out.state);

        // The next command may only move another 0.5 rad from the last
        let (out, report) = sim.proc(&Point2::new(10.0, -10.0)).unwrap();
        assert_eq!(report.step, 1);
        assert!(report.raw_steer_rad < 0.0);
        assert_eq!(out.steer_rad, 0.0);
        assert_eq!(sim.num_steps(), 2);
    }

    #[test]
    fn test_reinit_resets() {
        let mut sim = TrajSim::default();
        sim.init(SimParams::default()).unwrap();
        sim.proc(&Point2::new(0.0, 10.0)).unwrap();

        sim.init(SimParams::default()).unwrap();

        assert_eq!(sim.num_steps(), 0);
        assert_eq!(sim.prev_steer_rad(), 0.0);
        assert_eq!(sim.state(), &SimParams::default().initial_state);
    }
}
