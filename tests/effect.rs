mod tests {
    use myrtio_neopixel::color::{Color, HueDirection, hsl};
    use myrtio_neopixel::effect::{
        BAR_GRAPH_EMPTY, BAR_GRAPH_WARNING, BarGraph, Effect, RainbowGradient,
    };

    fn rainbow(start: i32, end: i32, steps: usize, direction: HueDirection) -> RainbowGradient {
        RainbowGradient::new(start, end, steps, direction).unwrap()
    }

    #[test]
    fn test_rainbow_empty() {
        assert_eq!(RainbowGradient::new(0, 360, 0, HueDirection::Clockwise), None);
    }

    #[test]
    fn test_rainbow_clockwise() {
        let gradient = rainbow(0, 240, 5, HueDirection::Clockwise);
        assert_eq!(gradient.hue_step(), 4800);
        assert_eq!(gradient.color_at(0), hsl(0, 100, 50));
        assert_eq!(gradient.color_at(1), hsl(48, 100, 50));
        assert_eq!(gradient.color_at(1).to_u32(), 0xFECA01);
        assert_eq!(gradient.color_at(2), hsl(96, 100, 50));
        assert_eq!(gradient.color_at(3), hsl(144, 100, 50));
        assert_eq!(gradient.color_at(4), hsl(240, 100, 50));
    }

    #[test]
    fn test_rainbow_full_circle_endpoints() {
        let gradient = rainbow(0, 360, 3, HueDirection::Clockwise);
        assert_eq!(gradient.color_at(0), hsl(0, 100, 50));
        assert_eq!(gradient.color_at(2), hsl(360, 100, 50));
    }

    #[test]
    fn test_rainbow_single_pixel() {
        let gradient = rainbow(10, 100, 1, HueDirection::Clockwise);
        assert_eq!(gradient.hue_step(), 9000);
        assert_eq!(gradient.color_at(0), hsl(10 + 9000, 100, 50));
    }

    #[test]
    fn test_rainbow_counter_clockwise() {
        let gradient = rainbow(0, 240, 5, HueDirection::CounterClockwise);
        assert_eq!(gradient.color_at(1), hsl(336, 100, 50));
        assert_eq!(gradient.color_at(2), hsl(312, 100, 50));
        assert_eq!(gradient.color_at(4), hsl(240, 100, 50));
    }

    #[test]
    fn test_rainbow_truncates_toward_zero() {
        // -333 / 100 truncates to -3, not -4
        let gradient = rainbow(0, 350, 3, HueDirection::CounterClockwise);
        assert_eq!(gradient.hue_step(), -333);
        assert_eq!(gradient.color_at(1), hsl(357, 100, 50));
        assert_ne!(gradient.color_at(1), hsl(356, 100, 50));
    }

    #[test]
    fn test_rainbow_start_past_full_turn_walks_backwards() {
        let gradient = rainbow(400, 10, 3, HueDirection::Clockwise);
        assert_eq!(gradient.hue_step(), -1000);
        assert_eq!(gradient.color_at(1), hsl(750, 100, 50));
        assert_ne!(gradient.color_at(1), hsl(150, 100, 50));
        assert_eq!(gradient.color_at(2), hsl(10, 100, 50));
    }

    #[test]
    fn test_bar_graph_no_scale() {
        let graph = BarGraph::new(5, 0, 10);
        assert_eq!(graph, BarGraph::NoScale);
        assert_eq!(graph.color_at(0), BAR_GRAPH_WARNING);
        assert_eq!(graph.color_at(1), Color::BLACK);
        assert_eq!(BarGraph::new(5, -3, 10), BarGraph::NoScale);
    }

    #[test]
    fn test_bar_graph_empty() {
        let graph = BarGraph::new(0, 100, 10);
        assert_eq!(graph.color_at(0), BAR_GRAPH_EMPTY);
        assert_eq!(graph.color_at(0).to_u32(), 0x666600);
        assert_eq!(graph.color_at(1), Color::BLACK);
    }

    #[test]
    fn test_bar_graph_level() {
        let graph = BarGraph::new(50, 100, 10);
        assert_eq!(graph, BarGraph::Level { lit: 5, len: 10 });
        assert_eq!(graph.color_at(0).to_u32(), 0x0000FF);
        assert_eq!(graph.color_at(5).to_u32(), 0x8D0072);
        assert_eq!(graph.color_at(6), Color::BLACK);
        assert_eq!(graph.color_at(9), Color::BLACK);
    }

    #[test]
    fn test_bar_graph_full_and_negative() {
        let graph = BarGraph::new(100, 100, 10);
        assert_eq!(graph.color_at(9).to_u32(), 0xFF0000);
        assert_eq!(BarGraph::new(-50, 100, 10), BarGraph::new(50, 100, 10));
    }

    #[test]
    fn test_bar_graph_single_pixel() {
        let graph = BarGraph::new(1, 1, 1);
        assert_eq!(graph.color_at(0).to_u32(), 0x0000FF);
    }
}
