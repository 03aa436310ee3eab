use super::theme::{Color, SkyTheme};

#[test]
fn test_color_css() {
	assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
	assert_eq!(
		Color::rgba(230, 240, 255, 0.22).to_css(),
		"rgba(230, 240, 255, 0.22)"
	);
	assert_eq!(Color::rgba(0, 0, 0, 0.0).to_css(), "rgba(0, 0, 0, 0)");
}

#[test]
fn test_lerp_truncates_and_clamps() {
	let a = Color::rgb(230, 235, 255);
	let b = Color::rgb(255, 252, 235);
	let q = a.lerp(b, 0.25);
	// 236.25, 239.25, 250.0
	assert_eq!((q.r, q.g, q.b), (236, 239, 250));

	assert_eq!(a.lerp(b, -1.0), a);
	assert_eq!(a.lerp(b, 3.0), b);
}

#[test]
fn test_streak_stops_scale_with_life() {
	let theme = SkyTheme::headliner();
	let stops = theme.streaks.stops(0.5);

	assert_eq!(stops[0].offset, 0.0);
	assert!((stops[0].color.a - 0.275).abs() < 1e-12);
	assert_eq!((stops[0].color.r, stops[0].color.g, stops[0].color.b), (255, 255, 255));

	assert_eq!(stops[1].offset, 0.3);
	assert!((stops[1].color.a - 0.11).abs() < 1e-12);
	assert_eq!((stops[1].color.r, stops[1].color.g, stops[1].color.b), (230, 240, 255));

	assert_eq!(stops[2].offset, 1.0);
	assert_eq!(stops[2].color.a, 0.0);

	let faded = theme.streaks.stops(-0.2);
	assert_eq!(faded[0].color.a, 0.0);
	assert_eq!(faded[1].color.a, 0.0);
}

#[test]
fn test_headliner_is_default() {
	assert_eq!(SkyTheme::default().backdrop.fill, SkyTheme::headliner().backdrop.fill);

	let headliner = SkyTheme::headliner();
	assert_eq!(headliner.backdrop.fill, Color::rgba(0, 0, 0, 0.92));
	let vignette = headliner.backdrop.vignette.as_ref().map(|v| (v.focus_x, v.focus_y));
	assert_eq!(vignette, Some((0.55, 0.45)));
}
