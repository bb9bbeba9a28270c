use std::cell::Cell;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use zxyt_core::{Direction, Frame};

use crate::{BoxMuller, ConfigError, SimulationConfig};

use super::{
    Action, Error, Event, Status, feedback_term, run, run_seeded, solve, solve_unobserved,
};

fn noiseless(timesteps: usize) -> SimulationConfig {
    SimulationConfig {
        timesteps,
        noise_intensity: 0.0,
        ..SimulationConfig::default()
    }
}

/// Asserts the update rule holds between every pair of consecutive frames.
fn assert_feedback_rule(frames: &[Frame], strength: f64) {
    for pair in frames.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let expected_z = if prev.x - prev.y > 0.0 {
            -strength
        } else {
            strength
        };
        assert_eq!(next.z, expected_z);

        let expected_direction = if next.x - next.y > 0.0 {
            Direction::Y
        } else {
            Direction::X
        };
        assert_eq!(next.direction, expected_direction);
    }
}

#[test]
fn produces_one_frame_per_timestep() {
    for timesteps in [1, 2, 3, 10, 500, 1234] {
        let config = SimulationConfig {
            timesteps,
            ..SimulationConfig::default()
        };
        let result = run_seeded(&config, 5).expect("valid config");
        assert_eq!(result.len(), timesteps);
    }
}

#[test]
fn initial_frame_has_zero_feedback() {
    let result = run_seeded(&SimulationConfig::default(), 1).expect("valid config");

    assert_eq!(result[0], Frame::initial(0.6, 0.4));
    assert_eq!(result[0].z, 0.0);
    assert_eq!(result[0].direction, Direction::Y);
}

#[test]
fn initial_direction_favors_x_when_y_leads_or_ties() {
    for (x, y) in [(0.2, 0.9), (0.5, 0.5)] {
        let config = SimulationConfig {
            initial_x: x,
            initial_y: y,
            ..SimulationConfig::default()
        };
        let result = run_seeded(&config, 3).expect("valid config");
        assert_eq!(result[0].direction, Direction::X);
    }
}

#[test]
fn noisy_run_follows_feedback_rule() {
    let config = SimulationConfig {
        timesteps: 2000,
        noise_intensity: 0.3,
        ..SimulationConfig::default()
    };
    let result = run_seeded(&config, 42).expect("valid config");

    assert_feedback_rule(result.as_slice(), config.observer_strength);
}

#[test]
fn noiseless_run_oscillates_with_period_two() {
    let result = solve_unobserved(&noiseless(10), &mut BoxMuller::seeded(0))
        .expect("valid config")
        .result;

    // Frame 1: imbalance 0.2 > 0, so z = -0.1 and the two variables meet.
    assert_eq!(result[1].z, -0.1);
    assert_relative_eq!(result[1].x, 0.5, epsilon = 1e-12);
    assert_relative_eq!(result[1].y, 0.5, epsilon = 1e-12);
    assert_eq!(result[1].direction, Direction::X);

    // Frame 2: imbalance 0 is not > 0, so z = +0.1 and the gap reopens.
    assert_eq!(result[2].z, 0.1);
    assert_relative_eq!(result[2].x, 0.6, epsilon = 1e-12);
    assert_relative_eq!(result[2].y, 0.4, epsilon = 1e-12);
    assert_eq!(result[2].direction, Direction::Y);

    for i in 3..result.len() {
        assert_relative_eq!(result[i].x, result[i - 2].x, epsilon = 1e-12);
        assert_relative_eq!(result[i].y, result[i - 2].y, epsilon = 1e-12);
        assert_eq!(result[i].z, result[i - 2].z);
        assert_eq!(result[i].direction, result[i - 2].direction);
    }
}

#[test]
fn tie_resolves_to_positive_feedback() {
    let config = SimulationConfig {
        timesteps: 2,
        noise_intensity: 0.0,
        initial_x: 0.5,
        initial_y: 0.5,
        ..SimulationConfig::default()
    };
    let result = solve_unobserved(&config, &mut || 0.0)
        .expect("valid config")
        .result;

    assert_eq!(result[1].z, 0.1);
    assert_relative_eq!(result[1].x, 0.6, epsilon = 1e-12);
    assert_relative_eq!(result[1].y, 0.4, epsilon = 1e-12);
    assert_eq!(result[1].direction, Direction::Y);
}

#[test]
fn feedback_term_uses_strict_comparison() {
    assert_eq!(feedback_term(0.2, 0.1), -0.1);
    assert_eq!(feedback_term(0.0, 0.1), 0.1);
    assert_eq!(feedback_term(-0.0, 0.1), 0.1);
    assert_eq!(feedback_term(-3.0, 0.25), 0.25);
}

#[test]
fn single_timestep_runs_no_iterations() {
    let draws = Cell::new(0_usize);
    let mut noise = || {
        draws.set(draws.get() + 1);
        0.0
    };
    let mut events = Vec::new();

    let solution = solve(&noiseless(1), &mut noise, |event: &Event| {
        events.push(*event);
        None
    })
    .expect("valid config");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.result.len(), 1);
    assert_eq!(events.len(), 1);
    assert_eq!(draws.get(), 0);
}

#[test]
fn draws_two_samples_per_step() {
    let draws = Cell::new(0_usize);
    let mut noise = || {
        draws.set(draws.get() + 1);
        0.0
    };

    solve_unobserved(&noiseless(25), &mut noise).expect("valid config");

    assert_eq!(draws.get(), 48);
}

#[test]
fn x_noise_is_drawn_before_y_noise() {
    let config = SimulationConfig {
        timesteps: 2,
        noise_intensity: 0.5,
        ..SimulationConfig::default()
    };
    let mut script = [1.0, -1.0].into_iter();
    let mut noise = move || script.next().unwrap_or(f64::NAN);

    let result = solve_unobserved(&config, &mut noise)
        .expect("valid config")
        .result;

    // x = 0.6 + 0.5 * 1.0 - 0.1, y = 0.4 + 0.5 * -1.0 + 0.1
    assert_relative_eq!(result[1].x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(result[1].y, 0.0, epsilon = 1e-12);
    assert_eq!(result[1].direction, Direction::Y);
}

#[test]
fn invalid_config_produces_nothing() {
    let config = SimulationConfig {
        timesteps: 0,
        ..SimulationConfig::default()
    };
    let draws = Cell::new(0_usize);
    let mut noise = || {
        draws.set(draws.get() + 1);
        0.0
    };
    let mut observed = 0;

    let error = solve(&config, &mut noise, |_: &Event| {
        observed += 1;
        None
    })
    .expect_err("zero timesteps is rejected");

    assert_eq!(error, Error::InvalidConfiguration(ConfigError::Timesteps));
    assert_eq!(observed, 0);
    assert_eq!(draws.get(), 0);
}

#[test]
fn run_rejects_negative_noise() {
    let config = SimulationConfig {
        noise_intensity: -0.05,
        ..SimulationConfig::default()
    };

    assert_eq!(
        run(&config),
        Err(Error::InvalidConfiguration(ConfigError::NoiseIntensity))
    );
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event| {
        if event.step >= 5 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(
        &SimulationConfig::default(),
        &mut BoxMuller::seeded(8),
        observer,
    )
    .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.result.len(), 6);
}

#[test]
fn observer_can_stop_on_initial_frame() {
    let solution = solve(
        &SimulationConfig::default(),
        &mut BoxMuller::seeded(8),
        |_: &Event| Some(Action::StopEarly),
    )
    .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.result.len(), 1);
}

#[test]
fn unbounded_horizon_can_be_stopped_by_observer() {
    let config = SimulationConfig {
        timesteps: usize::MAX,
        ..SimulationConfig::default()
    };

    let solution = solve(&config, &mut BoxMuller::seeded(1), |event: &Event| {
        (event.step >= 3).then_some(Action::StopEarly)
    })
    .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 3);
    assert_eq!(solution.result.len(), 4);
}

#[test]
fn events_mirror_the_result() {
    let mut events = Vec::new();
    let solution = solve(
        &SimulationConfig {
            timesteps: 20,
            ..SimulationConfig::default()
        },
        &mut BoxMuller::seeded(13),
        |event: &Event| {
            events.push(*event);
            None
        },
    )
    .expect("valid config");

    let steps: Vec<usize> = events.iter().map(|event| event.step).collect();
    assert_eq!(steps, (0..20).collect::<Vec<_>>());

    let frames: Vec<Frame> = events.iter().map(|event| event.frame).collect();
    assert_eq!(frames.as_slice(), solution.result.as_slice());
    assert_eq!(solution.steps, 19);
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = SimulationConfig::default();

    let a = run_seeded(&config, 77).expect("valid config");
    let b = run_seeded(&config, 77).expect("valid config");
    let c = run_seeded(&config, 78).expect("valid config");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn unseeded_run_is_complete_and_consistent() {
    let config = SimulationConfig::default();
    let result = run(&config).expect("valid config");

    assert_eq!(result.len(), 500);
    assert_feedback_rule(result.as_slice(), config.observer_strength);
}

#[test]
fn noise_residuals_match_intensity() {
    let config = SimulationConfig {
        timesteps: 500,
        noise_intensity: 0.05,
        ..SimulationConfig::default()
    };
    let mut noise = BoxMuller::seeded(2718);

    let mut x_residuals = Vec::new();
    let mut y_residuals = Vec::new();
    for _ in 0..100 {
        let result = solve_unobserved(&config, &mut noise)
            .expect("valid config")
            .result;

        for pair in result.as_slice().windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            x_residuals.push(next.x - prev.x - next.z);
            y_residuals.push(next.y - prev.y + next.z);
        }
    }

    for residuals in [&x_residuals, &y_residuals] {
        #[allow(clippy::cast_precision_loss)]
        let n = residuals.len() as f64;
        let mean = residuals.iter().sum::<f64>() / n;
        let variance = residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.002);
        assert_abs_diff_eq!(variance.sqrt(), 0.05, epsilon = 0.002);
    }
}
