mod tests {
    use myrtio_neopixel::color::{Color, HueDirection, NamedColor, Rgb, hsl, hsl_f32, hue_step};

    const RED_HSL: Color = Color::from_u32(0xFE0101);

    #[test]
    fn test_pack_round_trip() {
        for value in [0, 1, 17, 128, 200, 254, 255] {
            let color = Color::pack(value, 255 - value, value / 2);
            assert_eq!(i32::from(color.r()), value);
            assert_eq!(i32::from(color.g()), 255 - value);
            assert_eq!(i32::from(color.b()), value / 2);
        }
    }

    #[test]
    fn test_pack_masks_channels() {
        assert_eq!(Color::pack(257, -1, 0x1FF).to_u32(), 0x01FFFF);
        assert_eq!(Color::pack(0x12, 0x34, 0x56).to_u32(), 0x123456);
        assert_eq!(Color::from_u32(0x1234_5678).to_u32(), 0x345678);
    }

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(Color::from(Rgb::new(1, 2, 3)).to_u32(), 0x010203);
        assert_eq!(
            Rgb::from(Color::from_u32(0x0A0B0C)),
            Rgb {
                r: 10,
                g: 11,
                b: 12
            }
        );
    }

    #[test]
    fn test_hsl_truncates() {
        assert_eq!(hsl(0, 99, 50), RED_HSL);
        assert_eq!(hsl(0, 100, 50), RED_HSL);
        assert_ne!(hsl(0, 99, 50).to_u32(), 0xFF0000);
    }

    #[test]
    fn test_hsl_sextants() {
        assert_eq!(hsl(30, 100, 50).to_u32(), 0xFE7F01);
        assert_eq!(hsl(48, 100, 50).to_u32(), 0xFECA01);
        assert_eq!(hsl(60, 100, 50).to_u32(), 0xFEFE01);
        assert_eq!(hsl(120, 100, 50).to_u32(), 0x01FE01);
        assert_eq!(hsl(240, 100, 50).to_u32(), 0x0101FE);
        assert_eq!(hsl(300, 100, 50).to_u32(), 0xFE01FE);
    }

    #[test]
    fn test_hsl_wraps_and_clamps() {
        assert_eq!(hsl(360, 100, 50), RED_HSL);
        assert_eq!(hsl(720, 100, 50), RED_HSL);
        assert_eq!(hsl(-60, 100, 50), hsl(300, 100, 50));
        assert_eq!(hsl(0, 0, 50).to_u32(), 0x808080);
        assert_eq!(hsl(0, 100, 0), Color::BLACK);
        assert_eq!(hsl(0, 100, 100).to_u32(), 0xFFFAFA);
        assert_eq!(hsl(0, -20, 50), hsl(0, 0, 50));
    }

    #[test]
    fn test_hsl_f32_rounds_half_up() {
        assert_eq!(hsl_f32(119.5, 99.6, 49.5), hsl(120, 100, 50));
        assert_eq!(hsl_f32(29.4, 100.0, 50.0), hsl(29, 100, 50));
    }

    #[test]
    fn test_hue_step() {
        assert_eq!(hue_step(0, 240, 5, HueDirection::Clockwise), 4800);
        assert_eq!(hue_step(0, 240, 5, HueDirection::CounterClockwise), -2400);
        assert_eq!(hue_step(0, 240, 5, HueDirection::Shortest), -2400);
        assert_eq!(hue_step(0, 90, 3, HueDirection::Shortest), 3000);
        assert_eq!(hue_step(0, 360, 4, HueDirection::Clockwise), 0);
        assert_eq!(hue_step(0, 240, 0, HueDirection::Clockwise), 0);
        assert_eq!(hue_step(400, 10, 3, HueDirection::Clockwise), -1000);
        assert_eq!(hue_step(10, 400, 3, HueDirection::CounterClockwise), 1000);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(NamedColor::from_raw(0xFFA500), Some(NamedColor::Orange));
        assert_eq!(NamedColor::from_raw(0x123456), None);
        assert_eq!(Color::from(NamedColor::Violet).to_u32(), 0x8A2BE2);
        assert_eq!(NamedColor::Indigo.color().to_u32(), 0x000080);
        assert_eq!(NamedColor::parse_from_str("lime"), None);
        for named in NamedColor::ALL {
            assert_eq!(NamedColor::parse_from_str(named.as_str()), Some(named));
        }
    }
}
