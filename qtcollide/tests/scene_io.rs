use std::fs::File;
use std::io::BufReader;

use qtcollide::geometry::GeoShape;
use qtcollide::geometry::primitives::Rect;
use qtcollide::io::export::export_report;
use qtcollide::io::ext_repr::{ExtItem, ExtRect, ExtScene, ExtShape};
use qtcollide::io::import::Importer;
use qtcollide::util::QTConfig;
use test_case::test_case;

const SMALL_SCENE_PATH: &str = "../assets/scene_small.json";

fn read_scene(path: &str) -> ExtScene {
    let file = File::open(path).unwrap();
    serde_json::from_reader(BufReader::new(file)).unwrap()
}

fn ext_rect(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> ExtRect {
    ExtRect {
        x_min,
        y_min,
        x_max,
        y_max,
    }
}

fn rectangle(id: u64, x_min: f32, y_min: f32, width: f32, height: f32) -> ExtItem {
    ExtItem {
        id,
        shape: ExtShape::Rectangle {
            x_min,
            y_min,
            width,
            height,
        },
    }
}

fn small_config() -> QTConfig {
    QTConfig {
        max_depth: 5,
        max_entries_per_leaf: 2,
    }
}

#[test]
fn small_scene_report() {
    let ext_scene = read_scene(SMALL_SCENE_PATH);
    let scene = Importer::new(small_config())
        .import_scene(&ext_scene)
        .unwrap();
    let report = export_report(&scene);

    assert_eq!(report.n_indexed, 7);
    assert_eq!(report.queries.len(), 3);
    assert_eq!(report.queries[0].hits, vec![0, 1]);
    assert_eq!(report.queries[1].hits, vec![2]);
    assert_eq!(report.queries[2].hits, vec![0, 1, 3, 4]);

    //bounding boxes of the two circles in the bottom left overlap, the circles themselves do not
    assert_eq!(report.candidate_pairs, vec![(3, 4), (5, 6)]);
    assert_eq!(report.colliding_pairs, vec![(3, 4)]);
}

#[test_case(0; "always split")]
#[test_case(1; "one per leaf")]
#[test_case(10; "default capacity")]
fn report_does_not_depend_on_capacity(max_entries_per_leaf: usize) {
    let ext_scene = read_scene(SMALL_SCENE_PATH);
    let reference = export_report(
        &Importer::new(small_config())
            .import_scene(&ext_scene)
            .unwrap(),
    );
    let config = QTConfig {
        max_depth: 5,
        max_entries_per_leaf,
    };
    let report = export_report(&Importer::new(config).import_scene(&ext_scene).unwrap());

    assert_eq!(report.n_indexed, reference.n_indexed);
    assert_eq!(
        report.queries.iter().map(|q| &q.hits).collect::<Vec<_>>(),
        reference.queries.iter().map(|q| &q.hits).collect::<Vec<_>>()
    );
    assert_eq!(report.candidate_pairs, reference.candidate_pairs);
    assert_eq!(report.colliding_pairs, reference.colliding_pairs);
}

#[test]
fn items_outside_bounds_are_not_indexed() {
    let ext_scene = ExtScene {
        bounds: ext_rect(0.0, 0.0, 10.0, 10.0),
        items: vec![rectangle(0, 1.0, 1.0, 2.0, 2.0), rectangle(1, 20.0, 20.0, 1.0, 1.0)],
        queries: vec![ext_rect(0.0, 0.0, 100.0, 100.0)],
    };
    let scene = Importer::default().import_scene(&ext_scene).unwrap();

    assert_eq!(scene.shapes.len(), 2);
    let report = export_report(&scene);
    assert_eq!(report.n_indexed, 1);
    assert_eq!(report.queries[0].hits, vec![0]);
}

#[test_case(ext_rect(10.0, 0.0, 0.0, 10.0); "inverted x")]
#[test_case(ext_rect(0.0, 10.0, 10.0, 0.0); "inverted y")]
#[test_case(ext_rect(0.0, 0.0, f32::NAN, 10.0); "not a number")]
fn invalid_bounds_are_rejected(bounds: ExtRect) {
    let ext_scene = ExtScene {
        bounds,
        items: vec![],
        queries: vec![],
    };
    assert!(Importer::default().import_scene(&ext_scene).is_err());
}

#[test_case(ExtShape::Rectangle { x_min: 0.0, y_min: 0.0, width: -1.0, height: 1.0 }; "negative width")]
#[test_case(ExtShape::Circle { center: (5.0, 5.0), radius: -1.0 }; "negative radius")]
#[test_case(ExtShape::Circle { center: (f32::INFINITY, 5.0), radius: 1.0 }; "infinite center")]
fn invalid_shapes_are_rejected(shape: ExtShape) {
    let ext_scene = ExtScene {
        bounds: ext_rect(0.0, 0.0, 10.0, 10.0),
        items: vec![ExtItem { id: 0, shape }],
        queries: vec![],
    };
    assert!(Importer::default().import_scene(&ext_scene).is_err());
}

#[test]
fn duplicate_ids_are_rejected() {
    let ext_scene = ExtScene {
        bounds: ext_rect(0.0, 0.0, 10.0, 10.0),
        items: vec![rectangle(7, 1.0, 1.0, 1.0, 1.0), rectangle(7, 5.0, 5.0, 1.0, 1.0)],
        queries: vec![],
    };
    let err = Importer::default().import_scene(&ext_scene).unwrap_err();
    assert!(err.to_string().contains("duplicate item id: 7"));
}

#[test]
fn removed_shapes_leave_the_report() {
    let ext_scene = read_scene(SMALL_SCENE_PATH);
    let mut scene = Importer::new(small_config())
        .import_scene(&ext_scene)
        .unwrap();
    let ekey = scene
        .entries
        .keys()
        .find(|k| scene.entry_id(*k) == Some(4))
        .unwrap();

    assert!(scene.remove_shape(ekey).is_some());
    assert!(scene.remove_shape(ekey).is_none());
    assert_eq!(scene.entry_id(ekey), None);

    let report = export_report(&scene);
    assert_eq!(report.n_indexed, 6);
    assert_eq!(report.queries[2].hits, vec![0, 1, 3]);
    assert_eq!(report.candidate_pairs, vec![(5, 6)]);
    assert!(report.colliding_pairs.is_empty());
}

#[test]
fn added_shapes_join_the_report() {
    let ext_scene = read_scene(SMALL_SCENE_PATH);
    let mut scene = Importer::new(small_config())
        .import_scene(&ext_scene)
        .unwrap();

    //overlaps item 2 in the bottom right corner
    let shape: GeoShape = Rect::try_new(93.0, 93.0, 98.0, 98.0).unwrap().into();
    let (skey, ekey) = scene.add_shape(42, shape);

    assert_eq!(scene.shapes[skey], shape);
    assert_eq!(scene.entry_id(ekey), Some(42));
    let area = Rect::try_new(96.0, 96.0, 100.0, 100.0).unwrap();
    assert_eq!(scene.quadtree.query(&area, &scene.entries), vec![ekey]);

    let report = export_report(&scene);
    assert_eq!(report.n_indexed, 8);
    assert_eq!(report.queries[1].hits, vec![2, 42]);
    assert_eq!(report.candidate_pairs, vec![(2, 42), (3, 4), (5, 6)]);
    assert_eq!(report.colliding_pairs, vec![(2, 42), (3, 4)]);

    assert_eq!(scene.remove_shape(ekey), Some(shape));
    assert!(scene.quadtree.query(&area, &scene.entries).is_empty());

    let report = export_report(&scene);
    assert_eq!(report.n_indexed, 7);
    assert_eq!(report.queries[1].hits, vec![2]);
    assert_eq!(report.candidate_pairs, vec![(3, 4), (5, 6)]);
}

#[test]
fn degenerate_rectangles_are_accepted() {
    let ext_scene = ExtScene {
        bounds: ext_rect(0.0, 0.0, 10.0, 10.0),
        items: vec![rectangle(0, 5.0, 5.0, 0.0, 0.0)],
        queries: vec![ext_rect(5.0, 5.0, 5.0, 5.0)],
    };
    let report = export_report(&Importer::default().import_scene(&ext_scene).unwrap());
    assert_eq!(report.queries[0].hits, vec![0]);
}
