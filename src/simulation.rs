use bevy::prelude::*;
use chrono::{NaiveDate, NaiveTime};

use crate::config::SunConfig;
use crate::sun::{SolarAngles, solar_angles};

/// Wall-clock seconds between simulated time steps.
const STEP_INTERVAL_SECS: f32 = 0.5;
/// First simulated local hour of day.
const START_HOUR: u32 = 7;
/// Last simulated local hour of day.
const END_HOUR: u32 = 19;

/// Quarter-hour schedule of local times from 07:00 through 19:00 inclusive.
pub fn day_schedule() -> Vec<NaiveTime> {
    let mut times = Vec::new();
    for hour in START_HOUR..END_HOUR {
        for quarter in 0..4 {
            times.push(NaiveTime::from_hms_opt(hour, quarter * 15, 0).expect("in-range time"));
        }
    }
    times.push(NaiveTime::from_hms_opt(END_HOUR, 0, 0).expect("in-range time"));
    times
}

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Sun is up; carry on with the new angles.
    Advanced(SolarAngles),
    /// Sun dropped below the horizon; the simulation stopped itself.
    BelowHorizon,
    /// No scheduled times remain; the simulation stopped itself.
    Exhausted,
}

/// Day-simulation state: a repeating fixed-interval timer stepping through
/// the time-of-day schedule.
#[derive(Resource)]
pub struct DaySimulation {
    timer: Timer,
    schedule: Vec<NaiveTime>,
    next_index: usize,
    running: bool,
}

impl Default for DaySimulation {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(STEP_INTERVAL_SECS, TimerMode::Repeating),
            schedule: day_schedule(),
            next_index: 0,
            running: false,
        }
    }
}

impl DaySimulation {
    /// Restart from the beginning of the schedule.
    pub fn start(&mut self) {
        self.next_index = 0;
        self.timer.reset();
        self.running = true;
    }

    /// Halt without resetting progress.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Local time of the most recently consumed step, for display.
    pub fn current_time(&self) -> Option<NaiveTime> {
        self.schedule.get(self.next_index.checked_sub(1)?).copied()
    }

    /// Consume the next scheduled time and compute the sun position for it.
    ///
    /// Stops itself when the schedule is exhausted or the computed altitude
    /// falls below the horizon (a normal stopping condition, not an error).
    /// Unreachable coordinates or an impossible date also stop it.
    pub fn step(&mut self, date: NaiveDate, latitude: f64, longitude: f64) -> StepOutcome {
        let Some(local_time) = self.schedule.get(self.next_index).copied() else {
            self.running = false;
            return StepOutcome::Exhausted;
        };
        self.next_index += 1;

        match solar_angles(date, local_time, latitude, longitude) {
            Some(angles) if angles.altitude >= 0.0 => StepOutcome::Advanced(angles),
            _ => {
                self.running = false;
                StepOutcome::BelowHorizon
            }
        }
    }
}

/// Tick the day simulation and write the computed sun position back into the
/// sun configuration, which in turn retargets the light.
pub fn day_simulation_system(
    time: Res<Time>,
    mut simulation: ResMut<DaySimulation>,
    mut sun: ResMut<SunConfig>,
) {
    if !simulation.running {
        return;
    }
    if !simulation.timer.tick(time.delta()).just_finished() {
        return;
    }

    let Some(date) = sun.date() else {
        warn!("day simulation stopped: invalid date in sun configuration");
        simulation.stop();
        return;
    };

    match simulation.step(date, sun.latitude, sun.longitude) {
        StepOutcome::Advanced(angles) => {
            sun.azimuth = angles.azimuth as f32;
            sun.elevation = angles.altitude as f32;
        }
        StepOutcome::BelowHorizon => {
            info!("day simulation stopped: sun below horizon");
        }
        StepOutcome::Exhausted => {
            info!("day simulation finished: schedule exhausted");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, Timelike};

    use super::{DaySimulation, StepOutcome, day_schedule};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// Schedule covers 07:00 through 19:00 at quarter-hour spacing.
    #[test]
    fn schedule_is_quarter_hours_seven_to_nineteen() {
        let schedule = day_schedule();
        assert_eq!(schedule.len(), 49);
        assert_eq!(schedule[0], NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(
            *schedule.last().unwrap(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap()
        );
        for pair in schedule.windows(2) {
            let step = pair[1].signed_duration_since(pair[0]);
            assert_eq!(step.num_minutes(), 15);
        }
        assert!(schedule.iter().all(|t| t.minute() % 15 == 0));
    }

    /// A midsummer day at a mid-northern latitude keeps the sun up for the
    /// whole schedule, so the run ends by exhaustion.
    #[test]
    fn midsummer_run_ends_by_exhaustion() {
        let mut simulation = DaySimulation::default();
        simulation.start();

        let mut last = None;
        while simulation.running() {
            last = Some(simulation.step(date(2024, 6, 21), 52.23, 21.01));
        }
        assert_eq!(last, Some(StepOutcome::Exhausted));
    }

    /// A midwinter day at a high latitude loses the sun before 19:00, so the
    /// run stops below the horizon with schedule entries left over.
    #[test]
    fn midwinter_run_stops_below_horizon() {
        let mut simulation = DaySimulation::default();
        simulation.start();

        let mut steps = 0;
        let mut last = None;
        while simulation.running() {
            last = Some(simulation.step(date(2024, 12, 21), 60.17, 24.94));
            steps += 1;
        }
        assert_eq!(last, Some(StepOutcome::BelowHorizon));
        assert!(steps < day_schedule().len(), "stopped after {steps} steps");
    }

    /// Stop halts the run; start rewinds to the beginning of the schedule.
    #[test]
    fn stop_halts_and_start_rewinds() {
        let mut simulation = DaySimulation::default();
        simulation.start();
        simulation.step(date(2024, 6, 21), 52.23, 21.01);
        simulation.step(date(2024, 6, 21), 52.23, 21.01);
        simulation.stop();
        assert!(!simulation.running());
        assert_eq!(
            simulation.current_time(),
            NaiveTime::from_hms_opt(7, 15, 0)
        );

        simulation.start();
        assert!(simulation.running());
        assert_eq!(simulation.current_time(), None);
        simulation.step(date(2024, 6, 21), 52.23, 21.01);
        assert_eq!(
            simulation.current_time(),
            NaiveTime::from_hms_opt(7, 0, 0)
        );
    }
}
