//! Clock face geometry
//!
//! The face is described in "clock units": origin at the centre, x to the
//! right, y downward, the outermost tick ending at radius 80 and the minute
//! numerals at radius 90. Angles are degrees clockwise from 12 o'clock.
//!
//! [`ClockGeometry::instructions`] turns a time and a [`ClockSettings`]
//! into draw instructions. Renderers scale them with a [`Viewport`].

use crate::settings::ClockSettings;
use crate::time::Time;

/// Half-extent of the face in clock units. `Viewport::fit` maps it to the
/// shorter side of the surface.
pub const FACE_HALF_EXTENT: f32 = 100.0;

const HOUR_TICK: (f32, f32) = (70.0, 80.0);
const MINUTE_TICK: (f32, f32) = (77.0, 80.0);

const HOUR_NUMERAL_RADIUS: f32 = 60.0;
const HOUR_NUMERAL_OFFSET: Point = Point::new(-5.0, 5.0);
const HOUR_NUMERAL_SIZE: f32 = 10.0;

const MINUTE_NUMERAL_RADIUS: f32 = 90.0;
const MINUTE_NUMERAL_OFFSET: Point = Point::new(-5.0, 2.5);
const MINUTE_NUMERAL_SIZE: f32 = 6.0;

pub const HOUR_HAND: [Point; 3] = [Point::new(5.0, 8.0), Point::new(-5.0, 8.0), Point::new(0.0, -35.0)];
pub const MINUTE_HAND: [Point; 3] = [Point::new(3.0, 8.0), Point::new(-3.0, 8.0), Point::new(0.0, -55.0)];
pub const SECOND_HAND: [Point; 3] = [Point::new(1.0, 8.0), Point::new(-1.0, 8.0), Point::new(0.0, -80.0)];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the centre, `degrees` clockwise from 12.
    pub fn on_circle(radius: f32, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(radius * sin, -radius * cos)
    }

    /// Rotate clockwise about the origin.
    pub fn rotated(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

/// Hand rotations for one time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour_angle_degrees: f32,
    pub minute_angle_degrees: f32,
    pub second_angle_degrees: f32,
}

impl HandAngles {
    /// The hour hand moves with the minutes and the minute hand with the
    /// seconds, so neither snaps between positions.
    pub fn from_time(time: Time) -> Self {
        let hour = (time.hour() % 12) as f32;
        let minute = time.minute() as f32;
        let second = time.second() as f32;
        Self {
            hour_angle_degrees: 30.0 * (hour + minute / 60.0),
            minute_angle_degrees: 6.0 * (minute + second / 60.0),
            second_angle_degrees: 6.0 * second,
        }
    }
}

/// How a renderer should color an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Marks,
    HourNumerals,
    MinuteNumerals,
    HourHand,
    MinuteHand,
    SecondHand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Hour,
    Minute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralRing {
    Hours,
    Minutes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

/// One thing to paint, in clock units.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    /// Radial line segment.
    Tick { kind: TickKind, from: Point, to: Point, role: ColorRole },
    /// Text whose baseline-left corner sits at `anchor`.
    Numeral { ring: NumeralRing, text: String, anchor: Point, font_size: f32, role: ColorRole },
    /// Filled convex triangle, already rotated.
    Hand { hand: HandKind, points: [Point; 3], role: ColorRole },
}

impl DrawInstruction {
    pub fn role(&self) -> ColorRole {
        match self {
            DrawInstruction::Tick { role, .. }
            | DrawInstruction::Numeral { role, .. }
            | DrawInstruction::Hand { role, .. } => *role,
        }
    }
}

/// Geometry for one `(time, settings)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockGeometry {
    time: Time,
    settings: ClockSettings,
}

impl ClockGeometry {
    pub fn new(time: Time, settings: ClockSettings) -> Self {
        Self { time, settings }
    }

    pub fn hand_angles(&self) -> HandAngles {
        HandAngles::from_time(self.time)
    }

    /// Draw instructions in paint order: hour ticks, minute ticks, hour
    /// numerals, minute numerals, then the hands.
    ///
    /// The iterator is lazy and built fresh on each call.
    pub fn instructions(&self) -> impl Iterator<Item = DrawInstruction> {
        let settings = self.settings;
        let angles = self.hand_angles();

        let hour_tick_count = if settings.show_hour_marks { 12 } else { 0 };
        let minute_tick_count = if settings.show_minute_marks { 60 } else { 0 };

        let hour_ticks = (0..hour_tick_count).map(|i| tick(TickKind::Hour, HOUR_TICK, 30.0 * i as f32));

        // every fifth minute position already has an hour tick
        let minute_ticks = (0..minute_tick_count)
            .filter(|i| i % 5 != 0)
            .map(|i| tick(TickKind::Minute, MINUTE_TICK, 6.0 * i as f32));

        let hour_numerals = stepped(12, settings.hours_text_interval).map(|i| {
            let text = if i == 0 { "12".to_string() } else { i.to_string() };
            DrawInstruction::Numeral {
                ring: NumeralRing::Hours,
                text,
                anchor: Point::on_circle(HOUR_NUMERAL_RADIUS, 30.0 * i as f32).offset(HOUR_NUMERAL_OFFSET),
                font_size: HOUR_NUMERAL_SIZE,
                role: ColorRole::HourNumerals,
            }
        });

        let minute_numerals = stepped(60, settings.minutes_text_interval)
            .filter(|i| i % 5 == 0)
            .map(|i| {
                let text = if i == 0 { "00".to_string() } else { i.to_string() };
                DrawInstruction::Numeral {
                    ring: NumeralRing::Minutes,
                    text,
                    anchor: Point::on_circle(MINUTE_NUMERAL_RADIUS, 6.0 * i as f32).offset(MINUTE_NUMERAL_OFFSET),
                    font_size: MINUTE_NUMERAL_SIZE,
                    role: ColorRole::MinuteNumerals,
                }
            });

        let second_hand = settings
            .show_second_hand
            .then(|| hand(HandKind::Second, SECOND_HAND, angles.second_angle_degrees, ColorRole::SecondHand));

        let hands = [
            hand(HandKind::Hour, HOUR_HAND, angles.hour_angle_degrees, ColorRole::HourHand),
            hand(HandKind::Minute, MINUTE_HAND, angles.minute_angle_degrees, ColorRole::MinuteHand),
        ]
        .into_iter()
        .chain(second_hand);

        hour_ticks
            .chain(minute_ticks)
            .chain(hour_numerals)
            .chain(minute_numerals)
            .chain(hands)
    }
}

/// `0, step, 2*step, ... < limit`; nothing when `step` is 0.
fn stepped(limit: u32, step: u32) -> impl Iterator<Item = u32> {
    let end = if step == 0 { 0 } else { limit };
    (0..end).step_by(step.max(1) as usize)
}

fn tick(kind: TickKind, (inner, outer): (f32, f32), degrees: f32) -> DrawInstruction {
    DrawInstruction::Tick {
        kind,
        from: Point::on_circle(inner, degrees),
        to: Point::on_circle(outer, degrees),
        role: ColorRole::Marks,
    }
}

fn hand(hand: HandKind, shape: [Point; 3], degrees: f32, role: ColorRole) -> DrawInstruction {
    DrawInstruction::Hand {
        hand,
        points: shape.map(|p| p.rotated(degrees)),
        role,
    }
}

/// Maps clock units onto a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Point,
    pub scale: f32,
}

impl Viewport {
    /// Centre the face on a `width` x `height` surface, scaled uniformly so
    /// 200 clock units span the shorter side.
    pub fn fit(width: f32, height: f32) -> Self {
        Self::fit_rect(0.0, 0.0, width, height)
    }

    /// Like [`Viewport::fit`] for a surface whose top-left corner is at
    /// `(left, top)`.
    pub fn fit_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            center: Point::new(left + width / 2.0, top + height / 2.0),
            scale: width.min(height) / (2.0 * FACE_HALF_EXTENT),
        }
    }

    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(self.center.x + p.x * self.scale, self.center.y + p.y * self.scale)
    }

    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn at(hour: u32, minute: u32) -> Time {
        Time::new(hour, minute).unwrap()
    }

    fn collect(time: Time, settings: ClockSettings) -> Vec<DrawInstruction> {
        ClockGeometry::new(time, settings).instructions().collect()
    }

    fn numerals(instructions: &[DrawInstruction], which: NumeralRing) -> Vec<String> {
        instructions
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Numeral { ring, text, .. } if *ring == which => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn tick_count(instructions: &[DrawInstruction], which: TickKind) -> usize {
        instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::Tick { kind, .. } if *kind == which))
            .count()
    }

    #[test]
    fn test_hand_angles_quarter_to_four() {
        let a = HandAngles::from_time(at(3, 45));
        assert_abs_diff_eq!(a.hour_angle_degrees, 112.5, epsilon = 1e-4);
        assert_abs_diff_eq!(a.minute_angle_degrees, 270.0, epsilon = 1e-4);
    }

    #[test]
    fn test_hand_angles_afternoon_matches_morning() {
        assert_eq!(HandAngles::from_time(at(15, 10)), HandAngles::from_time(at(3, 10)));
    }

    #[test]
    fn test_minute_angle_includes_seconds() {
        let a = HandAngles::from_time(Time::with_seconds(0, 10, 30).unwrap());
        assert_abs_diff_eq!(a.minute_angle_degrees, 63.0, epsilon = 1e-4);
        assert_abs_diff_eq!(a.second_angle_degrees, 180.0, epsilon = 1e-4);
    }

    #[test]
    fn test_hour_angle_continuous() {
        for hour in 0..12 {
            let before = HandAngles::from_time(at(hour, 59)).hour_angle_degrees;
            let after = HandAngles::from_time(at((hour + 1) % 12, 0)).hour_angle_degrees;
            let gap = (after - before).rem_euclid(360.0);
            // one minute of hour-hand travel
            assert_abs_diff_eq!(gap, 0.5, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_point_on_circle() {
        let twelve = Point::on_circle(60.0, 0.0);
        assert_abs_diff_eq!(twelve.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(twelve.y, -60.0, epsilon = 1e-4);
        let three = Point::on_circle(60.0, 90.0);
        assert_abs_diff_eq!(three.x, 60.0, epsilon = 1e-4);
        assert_abs_diff_eq!(three.y, 0.0, epsilon = 1e-4);
        let six = Point::on_circle(60.0, 180.0);
        assert_abs_diff_eq!(six.y, 60.0, epsilon = 1e-4);
    }

    #[test]
    fn test_default_face() {
        let list = collect(at(10, 10), ClockSettings::default());
        assert_eq!(tick_count(&list, TickKind::Hour), 12);
        assert_eq!(tick_count(&list, TickKind::Minute), 48);

        let hours = numerals(&list, NumeralRing::Hours);
        assert_eq!(hours.len(), 12);
        assert_eq!(hours[0], "12");
        assert_eq!(hours[3], "3");

        let minutes = numerals(&list, NumeralRing::Minutes);
        assert_eq!(minutes.len(), 12);
        assert_eq!(minutes[0], "00");
        assert_eq!(minutes[11], "55");

        let hands: Vec<_> = list
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Hand { hand, .. } => Some(*hand),
                _ => None,
            })
            .collect();
        assert_eq!(hands, vec![HandKind::Hour, HandKind::Minute]);
        assert_eq!(list.len(), 12 + 48 + 12 + 12 + 2);
    }

    #[test]
    fn test_paint_order() {
        let list = collect(at(1, 5), ClockSettings::default());
        assert!(matches!(list.first(), Some(DrawInstruction::Tick { kind: TickKind::Hour, .. })));
        assert!(matches!(list.last(), Some(DrawInstruction::Hand { hand: HandKind::Minute, .. })));
    }

    #[test]
    fn test_hour_numeral_placement() {
        let list = collect(at(0, 0), ClockSettings::default());
        let three = list.iter().find_map(|i| match i {
            DrawInstruction::Numeral { ring: NumeralRing::Hours, text, anchor, font_size, role } if text == "3" => {
                Some((*anchor, *font_size, *role))
            }
            _ => None,
        });
        let (anchor, size, role) = three.unwrap();
        assert_abs_diff_eq!(anchor.x, 55.0, epsilon = 1e-3);
        assert_abs_diff_eq!(anchor.y, 5.0, epsilon = 1e-3);
        assert_eq!(size, 10.0);
        assert_eq!(role, ColorRole::HourNumerals);
    }

    #[test]
    fn test_minute_numeral_placement() {
        let list = collect(at(0, 0), ClockSettings::default());
        let zero = list.iter().find_map(|i| match i {
            DrawInstruction::Numeral { ring: NumeralRing::Minutes, text, anchor, .. } if text == "00" => Some(*anchor),
            _ => None,
        });
        let anchor = zero.unwrap();
        assert_abs_diff_eq!(anchor.x, -5.0, epsilon = 1e-3);
        assert_abs_diff_eq!(anchor.y, -87.5, epsilon = 1e-3);
    }

    #[test]
    fn test_numeral_intervals() {
        let settings = ClockSettings { hours_text_interval: 3, minutes_text_interval: 15, ..ClockSettings::default() };
        let list = collect(at(6, 0), settings);
        assert_eq!(numerals(&list, NumeralRing::Hours), vec!["12", "3", "6", "9"]);
        assert_eq!(numerals(&list, NumeralRing::Minutes), vec!["00", "15", "30", "45"]);
    }

    #[test]
    fn test_minute_numerals_need_multiple_of_five() {
        let settings = ClockSettings { minutes_text_interval: 7, ..ClockSettings::default() };
        let list = collect(at(6, 0), settings);
        assert_eq!(numerals(&list, NumeralRing::Minutes), vec!["00", "35"]);
    }

    #[test]
    fn test_zero_intervals_hide_numerals() {
        let no_minutes = ClockSettings { minutes_text_interval: 0, ..ClockSettings::default() };
        let list = collect(at(8, 20), no_minutes);
        assert!(numerals(&list, NumeralRing::Minutes).is_empty());
        assert_eq!(numerals(&list, NumeralRing::Hours).len(), 12);
        assert_eq!(tick_count(&list, TickKind::Hour), 12);
        assert_eq!(tick_count(&list, TickKind::Minute), 48);

        let no_hours = ClockSettings { hours_text_interval: 0, ..ClockSettings::default() };
        let list = collect(at(8, 20), no_hours);
        assert!(numerals(&list, NumeralRing::Hours).is_empty());
        assert_eq!(numerals(&list, NumeralRing::Minutes).len(), 12);
        assert_eq!(tick_count(&list, TickKind::Hour), 12);
        assert_eq!(tick_count(&list, TickKind::Minute), 48);
    }

    #[test]
    fn test_marks_toggle() {
        let settings = ClockSettings { show_hour_marks: false, show_minute_marks: false, ..ClockSettings::default() };
        let list = collect(at(8, 20), settings);
        assert_eq!(tick_count(&list, TickKind::Hour), 0);
        assert_eq!(tick_count(&list, TickKind::Minute), 0);
        assert!(list.iter().all(|i| i.role() != ColorRole::Marks));
    }

    #[test]
    fn test_minute_ticks_skip_hour_positions() {
        let list = collect(at(0, 0), ClockSettings::default());
        for instruction in &list {
            if let DrawInstruction::Tick { kind: TickKind::Minute, to, .. } = instruction {
                // hour positions lie on multiples of 30 degrees
                let degrees = to.x.atan2(-to.y).to_degrees().rem_euclid(360.0);
                let nearest = (degrees / 30.0).round() * 30.0;
                assert!((degrees - nearest).abs() > 1.0, "minute tick at {degrees}");
            }
        }
    }

    #[test]
    fn test_hands_rotated() {
        let list = collect(at(3, 0), ClockSettings::default());
        let hour_tip = list.iter().find_map(|i| match i {
            DrawInstruction::Hand { hand: HandKind::Hour, points, .. } => Some(points[2]),
            _ => None,
        });
        let tip = hour_tip.unwrap();
        assert_abs_diff_eq!(tip.x, 35.0, epsilon = 1e-3);
        assert_abs_diff_eq!(tip.y, 0.0, epsilon = 1e-3);

        let minute_tip = list.iter().find_map(|i| match i {
            DrawInstruction::Hand { hand: HandKind::Minute, points, .. } => Some(points[2]),
            _ => None,
        });
        let tip = minute_tip.unwrap();
        assert_abs_diff_eq!(tip.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(tip.y, -55.0, epsilon = 1e-3);
    }

    #[test]
    fn test_second_hand_optional() {
        let time = Time::with_seconds(4, 0, 15).unwrap();
        let off = collect(time, ClockSettings::default());
        assert!(!off.iter().any(|i| matches!(i, DrawInstruction::Hand { hand: HandKind::Second, .. })));

        let settings = ClockSettings { show_second_hand: true, ..ClockSettings::default() };
        let on = collect(time, settings);
        let tip = on.iter().find_map(|i| match i {
            DrawInstruction::Hand { hand: HandKind::Second, points, role } => Some((points[2], *role)),
            _ => None,
        });
        let (tip, role) = tip.unwrap();
        assert_abs_diff_eq!(tip.x, 80.0, epsilon = 1e-3);
        assert_eq!(role, ColorRole::SecondHand);
        assert_eq!(on.len(), off.len() + 1);
    }

    #[test]
    fn test_instructions_repeatable() {
        let geometry = ClockGeometry::new(at(11, 55), ClockSettings::default());
        let first: Vec<_> = geometry.instructions().collect();
        let second: Vec<_> = geometry.instructions().collect();
        assert_eq!(first, second);
        assert_eq!(first, collect(at(11, 55), ClockSettings::default()));
    }

    #[test]
    fn test_viewport_fit() {
        let v = Viewport::fit(400.0, 300.0);
        assert_abs_diff_eq!(v.scale, 1.5, epsilon = 1e-6);
        assert_eq!(v.center, Point::new(200.0, 150.0));
        let top = v.to_screen(Point::new(0.0, -100.0));
        assert_abs_diff_eq!(top.y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(v.scale_length(10.0), 15.0, epsilon = 1e-6);

        let offset = Viewport::fit_rect(10.0, 20.0, 200.0, 200.0);
        assert_eq!(offset.center, Point::new(110.0, 120.0));
        assert_abs_diff_eq!(offset.scale, 1.0, epsilon = 1e-6);
    }
}
