use minwidth_core::{Integrand, Interval, round_half_up};

use super::{Action, Config, Error, Event, Observer, Solution, Trial};

/// Core width search implementation.
pub(super) fn run<F, G, Obs>(
    function: &F,
    primitive: &G,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Integrand,
    G: Integrand,
    Obs: Observer,
{
    let [start, end] = bounds;
    let interval = Interval::new(start, end)?;

    let at_end = eval_checked(primitive, interval.end())?;
    let at_start = eval_checked(primitive, interval.start())?;
    let exact_area = (at_end - at_start).abs();

    let mut rects_count: u64 = 1;
    loop {
        let trial = Trial::compute(function, &interval, rects_count)?;

        let event = Event {
            trial: &trial,
            exact_area,
        };
        if let Some(Action::Cancel) = observer.watch(&event) {
            return Err(Error::Cancelled { rects_count });
        }

        if (trial.area - exact_area).abs() < config.sigma * exact_area {
            return Ok(Solution {
                width: round_half_up(trial.rect_width, config.decimal_places),
                rects_count: trial.rects_count,
                area: round_half_up(trial.area, config.decimal_places),
            });
        }

        // The rejected trial's width has shrunk below the requested display
        // resolution; finer partitions cannot produce a distinguishable width.
        #[allow(clippy::float_cmp)]
        if round_half_up(trial.rect_width, config.decimal_places) == 0.0 {
            return Err(Error::NoSolution { rects_count });
        }

        rects_count += 1;
    }
}

/// Evaluates `f` at `x` and requires a finite value.
pub(super) fn eval_checked<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Integrand,
{
    let value = f.eval(x).map_err(|e| Error::Function(Box::new(e)))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { x, value })
    }
}
