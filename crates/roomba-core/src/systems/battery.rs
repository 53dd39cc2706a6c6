//! Battery system — step-based depletion and station charging.
//!
//! Both processes run every tick and are independent of each other.
//! Timing uses accumulated simulation seconds, never wall clock, so the
//! system behaves identically headless and under render hiccups.

use crate::components::{Agent, ChargingStation};
use crate::params::battery;

/// Apply one tick of battery bookkeeping.
///
/// Depletion: once the step counter reaches the threshold, the battery
/// drops by the fixed amount (saturating at 0) and the counter resets.
/// Charging: while in station range, every elapsed charge interval adds
/// the fixed amount (clamped at 100) and resets the charge timer.
pub fn update_battery(
    agent: &mut Agent,
    station: &ChargingStation,
    sim_time: f64,
    last_charge_time: &mut f64,
) {
    if agent.steps_taken >= battery::STEPS_PER_DECREASE {
        agent.battery = agent.battery.saturating_sub(battery::DECREASE_AMOUNT);
        agent.steps_taken = 0;
    }

    if station.in_range(agent.pos, agent.radius)
        && sim_time - *last_charge_time >= battery::CHARGE_INTERVAL_SECS
    {
        agent.battery = (agent.battery + battery::CHARGE_AMOUNT).min(100);
        *last_charge_time = sim_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Vec2;

    fn far_station() -> ChargingStation {
        ChargingStation::new(Vec2::new(50.0, 50.0), 40.0)
    }

    fn agent_at(x: f32, y: f32) -> Agent {
        Agent::new(Vec2::new(x, y))
    }

    #[test]
    fn test_depletion_fires_at_threshold() {
        let mut agent = agent_at(400.0, 300.0);
        agent.steps_taken = battery::STEPS_PER_DECREASE;
        let mut last_charge = 0.0;
        update_battery(&mut agent, &far_station(), 0.0, &mut last_charge);
        assert_eq!(agent.battery, 95);
        assert_eq!(agent.steps_taken, 0);
    }

    #[test]
    fn test_no_depletion_below_threshold() {
        let mut agent = agent_at(400.0, 300.0);
        agent.steps_taken = battery::STEPS_PER_DECREASE - 1;
        let mut last_charge = 0.0;
        update_battery(&mut agent, &far_station(), 0.0, &mut last_charge);
        assert_eq!(agent.battery, 100);
        assert_eq!(agent.steps_taken, battery::STEPS_PER_DECREASE - 1);
    }

    #[test]
    fn test_depletion_saturates_at_zero() {
        let mut agent = agent_at(400.0, 300.0);
        agent.battery = 3;
        agent.steps_taken = battery::STEPS_PER_DECREASE;
        let mut last_charge = 0.0;
        update_battery(&mut agent, &far_station(), 0.0, &mut last_charge);
        assert_eq!(agent.battery, 0);
    }

    #[test]
    fn test_charging_requires_dwell_interval() {
        let mut agent = agent_at(50.0, 50.0);
        agent.battery = 90;
        let mut last_charge = 0.0;

        update_battery(&mut agent, &far_station(), 4.9, &mut last_charge);
        assert_eq!(agent.battery, 90);

        update_battery(&mut agent, &far_station(), 5.0, &mut last_charge);
        assert_eq!(agent.battery, 92);
        assert_eq!(last_charge, 5.0);

        // Timer reset — no double charge on the next tick.
        update_battery(&mut agent, &far_station(), 5.1, &mut last_charge);
        assert_eq!(agent.battery, 92);
    }

    #[test]
    fn test_charging_clamps_at_full() {
        let mut agent = agent_at(50.0, 50.0);
        agent.battery = 99;
        let mut last_charge = 0.0;
        update_battery(&mut agent, &far_station(), 6.0, &mut last_charge);
        assert_eq!(agent.battery, 100);
    }

    #[test]
    fn test_no_charging_out_of_range() {
        let mut agent = agent_at(400.0, 300.0);
        agent.battery = 50;
        let mut last_charge = 0.0;
        update_battery(&mut agent, &far_station(), 100.0, &mut last_charge);
        assert_eq!(agent.battery, 50);
        assert_eq!(last_charge, 0.0);
    }

    #[test]
    fn test_depletion_and_charging_are_independent() {
        // In range with a full step counter: both fire on the same tick.
        let mut agent = agent_at(50.0, 50.0);
        agent.battery = 90;
        agent.steps_taken = battery::STEPS_PER_DECREASE;
        let mut last_charge = 0.0;
        update_battery(&mut agent, &far_station(), 6.0, &mut last_charge);
        assert_eq!(agent.battery, 90 - 5 + 2);
        assert_eq!(agent.steps_taken, 0);
    }
}
