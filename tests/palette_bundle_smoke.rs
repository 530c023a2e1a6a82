use std::fs;
use std::path::Path;

use sandbx_engine::domain::content::Palette;
use sandbx_engine::elements::{rgb, BehaviorKind, Category};
use sandbx_engine::{GridPos, WorldCore};

fn bundle_json() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("content/palette.json");
    fs::read_to_string(path).expect("content/palette.json should exist")
}

#[test]
fn palette_bundle_parses_and_matches_builtin() {
    let palette = Palette::from_bundle_json(&bundle_json()).expect("palette.json should parse");
    let builtin = Palette::builtin();

    for key in ["sand-powder", "metal-scraps", "water"] {
        let id = palette.id_by_key(key).unwrap();
        assert_eq!(Some(id), builtin.id_by_key(key), "{} keeps its id", key);
        assert_eq!(palette.props(id), builtin.props(id), "{} matches builtin", key);
    }

    let stone = palette.id_by_key("stone").unwrap();
    let props = palette.props(stone).unwrap();
    assert_eq!(props.matter.category(), Category::Solid);
    assert_eq!(props.behavior, BehaviorKind::None);
    assert_eq!(props.color, rgb(128, 128, 128));
}

#[test]
fn solid_elements_never_move() {
    let mut world = WorldCore::new(20, 20, 1);
    world.load_palette_json(&bundle_json()).unwrap();
    let stone = world.palette().id_by_key("stone").unwrap();
    let sand = world.palette().id_by_key("sand-powder").unwrap();

    assert!(world.place_particle(GridPos::new(10, 5), stone));
    assert!(world.place_particle(GridPos::new(10, 0), sand));
    for _ in 0..60 {
        world.step();
    }

    assert_eq!(world.particle_at(GridPos::new(10, 5)).map(|p| p.element), Some(stone));
    assert_eq!(world.particle_count(), 2);
    assert!(world.positions().iter().all(|p| world.geometry().in_bounds(*p)));
}
