#[cfg(test)]
mod tests {
    use crate::*;

    fn r() -> Rect {
        Rect::new(10.0, 10.0, 100.0, 50.0)
    }

    #[test]
    fn test_rect_contains_interior() {
        assert!(r().contains(Vec2::new(50.0, 30.0)));
        assert!(!r().contains(Vec2::new(5.0, 30.0)));
        assert!(!r().contains(Vec2::new(50.0, 70.0)));
    }

    #[test]
    fn test_rect_contains_edges_half_open() {
        // near edges are inside
        assert!(r().contains(Vec2::new(10.0, 30.0)));
        assert!(r().contains(Vec2::new(50.0, 10.0)));
        // far edges are outside
        assert!(!r().contains(Vec2::new(110.0, 30.0)));
        assert!(!r().contains(Vec2::new(50.0, 60.0)));
        assert!(r().contains(Vec2::new(109.9, 59.9)));
    }

    #[test]
    fn test_rect_contains_corners() {
        assert!(r().contains(Vec2::new(10.0, 10.0)));
        assert!(!r().contains(Vec2::new(110.0, 10.0)));
        assert!(!r().contains(Vec2::new(10.0, 60.0)));
        assert!(!r().contains(Vec2::new(110.0, 60.0)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let e = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!e.contains(Vec2::new(5.0, 5.0)));
        assert_eq!(Rect::new(0.0, 0.0, -3.0, 4.0).w, 0.0);
    }

    #[test]
    fn test_rect_patch_and_translate() {
        let moved = r().translate(5.0, -5.0);
        assert_eq!(moved, Rect::new(15.0, 5.0, 100.0, 50.0));

        let patched = r().patch(RectPatch {
            x: Some(-100.0),
            h: Some(20.0),
            ..Default::default()
        });
        assert_eq!(patched, Rect::new(-100.0, 10.0, 100.0, 20.0));
    }

    #[test]
    fn test_rect_inset_never_negative() {
        assert_eq!(r().inset(5.0), Rect::new(15.0, 15.0, 90.0, 40.0));
        assert_eq!(r().inset(40.0).h, 0.0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_scale_value() {
        let base = Color::from_rgb(200, 100, 50);
        assert_eq!(base.scale_value(HOVER_FACTOR), Color::from_rgb(180, 90, 45));
        assert_eq!(base.scale_value(PRESSED_FACTOR), Color::from_rgb(160, 80, 40));

        let grey = Color::from_rgba(100, 100, 100, 128);
        assert_eq!(grey.scale_value(ON_HOVER_FACTOR), Color(70, 70, 70, 128));
    }

    #[test]
    fn test_color_hsv_round_trip_primaries() {
        for c in [
            Color::from_rgb(255, 0, 0),
            Color::from_rgb(0, 255, 0),
            Color::from_rgb(0, 0, 255),
            Color::from_rgb(255, 255, 0),
            Color::WHITE,
            Color::BLACK,
        ] {
            let (h, s, v) = c.to_hsv();
            assert_eq!(Color::from_hsv(h, s, v, 255), c);
        }
    }

    #[test]
    fn test_event_position() {
        assert_eq!(
            InputEvent::pointer_down(3.0, 4.0).position(),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(InputEvent::key(Key::Enter).position(), None);
        assert!(InputEvent::pointer_up(0.0, 0.0).is_primary_up());
        assert!(
            !InputEvent::PointerDown {
                position: Vec2::ZERO,
                button: PointerButton::Secondary
            }
            .is_primary_down()
        );
    }

    #[test]
    fn test_scene_clamps_radius() {
        let mut scene = Scene::new();
        scene.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE, -2.0);
        scene.fill_circle(Vec2::ZERO, -1.0, Color::BLACK);
        assert_eq!(
            scene.nodes,
            vec![
                SceneNode::Rect {
                    rect: Rect::new(0.0, 0.0, 1.0, 1.0),
                    color: Color::WHITE,
                    radius: 0.0
                },
                SceneNode::Circle {
                    center: Vec2::ZERO,
                    radius: 0.0,
                    color: Color::BLACK
                },
            ]
        );
        scene.clear();
        assert!(scene.nodes.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rect_serde() {
        let json = serde_json::to_string(&Rect::new(0.0, 0.0, 50.0, 30.0)).unwrap();
        assert_eq!(json, r#"{"x":0.0,"y":0.0,"w":50.0,"h":30.0}"#);
        let c: Color = serde_json::from_str("[1,2,3,255]").unwrap();
        assert_eq!(c, Color(1, 2, 3, 255));
    }
}
