// Transform builder state machine tests

use rstest::rstest;
use wixmedia::image::{Alignment, TransformBuilder, TransformError, Unsharp};

const DOG: &str = "http://media.example.net/goog-1/images/ae1d/dog.png";

type Apply = fn(&mut TransformBuilder) -> Result<(), TransformError>;

fn apply_srz(b: &mut TransformBuilder) -> Result<(), TransformError> {
    b.srz(120, 120, None, Some("top-left"), Unsharp::default())
        .map(|_| ())
}

fn apply_srb(b: &mut TransformBuilder) -> Result<(), TransformError> {
    b.srb(300, 200, Some(90), Unsharp::new(1.0, 0.5, 0.0))
        .map(|_| ())
}

fn apply_canvas(b: &mut TransformBuilder) -> Result<(), TransformError> {
    b.canvas(400, 400, None, Some("bottom")).map(|_| ())
}

fn apply_fill(b: &mut TransformBuilder) -> Result<(), TransformError> {
    b.fill(50, 60, Some(75)).map(|_| ())
}

fn apply_crop(b: &mut TransformBuilder) -> Result<(), TransformError> {
    b.crop(10, 10, 120, 120, None).map(|_| ())
}

const ALL_COMMANDS: [Apply; 5] = [apply_srz, apply_srb, apply_canvas, apply_fill, apply_crop];

#[rstest]
#[case::srz(apply_srz, "srz")]
#[case::srb(apply_srb, "srb")]
#[case::canvas(apply_canvas, "canvas")]
#[case::fill(apply_fill, "fill")]
#[case::crop(apply_crop, "crop")]
fn test_second_command_always_rejected(#[case] first: Apply, #[case] name: &'static str) {
    for second in ALL_COMMANDS {
        let mut image = TransformBuilder::new(DOG);
        first(&mut image).unwrap();
        image.adjust([("contrast", 10)]);
        let before = image.clone();

        let err = second(&mut image).unwrap_err();
        assert_eq!(err, TransformError::CommandAlreadySet { current: name });
        assert_eq!(image, before, "failed call must not change state");
    }
}

#[rstest]
#[case::srz(apply_srz)]
#[case::srb(apply_srb)]
#[case::canvas(apply_canvas)]
#[case::fill(apply_fill)]
#[case::crop(apply_crop)]
fn test_reset_restores_clean_slate(#[case] apply: Apply) {
    let mut image = TransformBuilder::new(DOG);
    apply(&mut image).unwrap();
    image.adjust(["auto"]).filter([("blur", 5)]);

    image.reset();
    assert_eq!(image.rest_url(), DOG);

    // Reset twice is still clean
    image.reset();
    assert_eq!(image.rest_url(), DOG);

    for next in ALL_COMMANDS {
        image.reset();
        assert!(next(&mut image).is_ok());
    }
}

#[test]
fn test_adjust_and_filter_any_order() {
    let mut before_cmd = TransformBuilder::new(DOG);
    before_cmd.adjust([("brightness", 60)]);
    before_cmd.fill(10, 10, None).unwrap();

    let mut after_cmd = TransformBuilder::new(DOG);
    after_cmd.fill(10, 10, None).unwrap();
    after_cmd.adjust([("brightness", 60)]);

    assert_eq!(before_cmd.rest_url(), after_cmd.rest_url());
}

#[test]
fn test_last_write_wins() {
    let mut image = TransformBuilder::new("d/dog.png");
    image
        .adjust([("contrast", 10), ("brightness", 5)])
        .adjust([("contrast", 53)]);
    assert_eq!(image.rest_url(), "d/adjust/con_53,br_5/dog.png");
}

#[rstest]
#[case("center", "c")]
#[case("top", "t")]
#[case("top-left", "tl")]
#[case("top-right", "tr")]
#[case("bottom", "b")]
#[case("bottom-left", "bl")]
#[case("bottom-right", "br")]
#[case("left", "l")]
#[case("right", "r")]
#[case("face", "f")]
#[case("faces", "fs")]
fn test_alignment_codes(#[case] name: &str, #[case] code: &str) {
    assert_eq!(name.parse::<Alignment>().unwrap().code(), code);

    let mut image = TransformBuilder::new("d/x.jpg");
    image.canvas(10, 20, None, Some(name)).unwrap();
    assert_eq!(
        image.rest_url(),
        format!("d/canvas/w_10,h_20,a_{}/x.jpg", code)
    );
}

#[test]
fn test_unknown_alignment_rejected_everywhere() {
    let mut image = TransformBuilder::new(DOG);
    assert!(matches!(
        image.srz(1, 1, None, Some("centre"), Unsharp::default()),
        Err(TransformError::UnknownAlignment { .. })
    ));
    assert!(matches!(
        image.canvas(1, 1, None, Some("up")),
        Err(TransformError::UnknownAlignment { .. })
    ));
    assert!(matches!(
        image.watermark(50, Some("down"), 10),
        Err(TransformError::UnknownAlignment { .. })
    ));
    assert_eq!(image.rest_url(), DOG);
}
