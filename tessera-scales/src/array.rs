//! Tick generation and summary statistics over accessor values.
//!
//! Undefined and NaN accessor values are ignored by every statistic here, the
//! same filter the binning engine applies.

use itertools::{Itertools, MinMaxResult};
use tessera_common::{Accessor, AccessorError};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Generate approximately `count` nicely rounded ticks within `[start, stop]`
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return vec![];
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };

    if !(i2 >= i1) {
        return vec![];
    }

    let n = (i2 - i1 + 1.0) as usize;
    let tick = |i: usize| -> f64 {
        let k = if reverse { i2 - i as f64 } else { i1 + i as f64 };
        if inc < 0.0 {
            k / -inc
        } else {
            k * inc
        }
    };
    (0..n).map(tick).collect()
}

/// Integer tick indices and increment for `[start, stop]`.
///
/// A negative increment `-k` stands for a step of `1 / k`, which keeps
/// fractional ticks exact when they are computed by division.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = nice_factor(error);

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let temp_inc = 10f64.powf(-power) / factor;
        i1 = (start * temp_inc).round();
        i2 = (stop * temp_inc).round();
        if i1 / temp_inc < start {
            i1 += 1.0;
        }
        if i2 / temp_inc > stop {
            i2 -= 1.0;
        }
        inc = -temp_inc;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && 0.5 <= count && count < 2.0 {
        return tick_spec(start, stop, count * 2.0);
    }

    (i1, i2, inc)
}

fn nice_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Tick increment for `[start, stop]` (`start <= stop`), encoded like
/// [`tick_spec`]: positive for whole steps, `-k` for a step of `1 / k`.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    if !(count > 0.0) {
        return f64::NAN;
    }
    if start == stop {
        return f64::NEG_INFINITY;
    }
    let step = (stop - start) / count;
    if step == 0.0 || !step.is_finite() {
        return f64::NAN;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = nice_factor(error);
    if power >= 0.0 {
        10f64.powf(power) * factor
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Signed distance between adjacent ticks of `ticks(start, stop, count)`
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// Extends `[start, stop]` outward to multiples of the tick increment.
///
/// Repeats until the increment is stable, since widening the domain can
/// change the increment. Returns the input unchanged when no finite increment
/// exists (empty or degenerate domain).
pub fn nice(start: f64, stop: f64, count: f64) -> (f64, f64) {
    let (mut lo, mut hi) = (start.min(stop), start.max(stop));
    let mut prestep = None;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if prestep == Some(step) || !step.is_finite() {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }
    if start <= stop {
        (lo, hi)
    } else {
        (hi, lo)
    }
}

/// Minimum and maximum of the defined accessor values, or `None` when there
/// are none
pub fn extent<R>(
    data: &[R],
    accessor: &impl Accessor<R>,
) -> Result<Option<(f64, f64)>, AccessorError> {
    let values = accessor.values(data)?;
    Ok(match values.into_iter().map(|(_, v)| v).minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    })
}

/// Largest defined accessor value
pub fn max<R>(data: &[R], accessor: &impl Accessor<R>) -> Result<Option<f64>, AccessorError> {
    Ok(extent(data, accessor)?.map(|(_, max)| max))
}

/// Arithmetic mean of the defined accessor values
pub fn mean<R>(data: &[R], accessor: &impl Accessor<R>) -> Result<Option<f64>, AccessorError> {
    let values = accessor.values(data)?;
    if values.is_empty() {
        return Ok(None);
    }
    let sum: f64 = values.iter().map(|(_, v)| v).sum();
    Ok(Some(sum / values.len() as f64))
}
