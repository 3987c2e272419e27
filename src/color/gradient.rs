/// Hue direction for gradient calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueDirection {
    #[default]
    Clockwise,
    CounterClockwise,
    Shortest,
}

/// Per-pixel hue step in hundredths of a degree
///
/// Distances use truncating `%`, so a start hue more than a full turn past
/// the end hue yields a negative distance and the gradient walks backwards.
/// The step magnitude always stays below `36_000`. Returns zero when
/// `steps` is zero.
#[allow(clippy::cast_possible_truncation)]
pub fn hue_step(start_hue: i32, end_hue: i32, steps: usize, direction: HueDirection) -> i32 {
    let Ok(steps) = i64::try_from(steps) else {
        return 0;
    };
    if steps == 0 {
        return 0;
    }
    let (start_hue, end_hue) = (i64::from(start_hue), i64::from(end_hue));

    let distance_cw = ((end_hue + 360) - start_hue) % 360;
    let distance_ccw = ((start_hue + 360) - end_hue) % 360;

    let step_cw = (distance_cw * 100) / steps;
    let step_ccw = -(distance_ccw * 100) / steps;

    let step = match direction {
        HueDirection::Clockwise => step_cw,
        HueDirection::CounterClockwise => step_ccw,
        HueDirection::Shortest => {
            if distance_cw < distance_ccw {
                step_cw
            } else {
                step_ccw
            }
        }
    };
    step as i32
}
