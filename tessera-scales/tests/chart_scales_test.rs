use float_cmp::assert_approx_eq;
use tessera_common::{Dimensions, FieldAccessor, Margin, Record};
use tessera_scales::array::{extent, max, mean};
use tessera_scales::{LinearScale, LinearScaleConfig};

fn weather() -> Vec<Record> {
    [(8.9, 0.72), (14.3, 0.81), (-2.6, 0.44), (21.8, 0.93)]
        .into_iter()
        .map(|(dew_point, humidity)| {
            Record::new()
                .with_field("dewPoint", dew_point)
                .with_field("humidity", humidity)
        })
        .collect()
}

#[test]
fn test_x_scale_from_extent_is_nice() {
    let data = weather();
    let dims = Dimensions::new(600.0, 360.0, Margin::new(30.0, 20.0, 50.0, 20.0));

    let domain = extent(&data, &FieldAccessor::new("dewPoint")).unwrap().unwrap();
    assert_eq!(domain, (-2.6, 21.8));

    let x_scale = LinearScale::new(&LinearScaleConfig {
        domain,
        range: (0.0, dims.bounded_width()),
        nice: Some(10),
        ..Default::default()
    });
    assert_eq!(x_scale.domain(), (-4.0, 22.0));
    assert_approx_eq!(f64, x_scale.scale(-4.0), 0.0);
    assert_approx_eq!(f64, x_scale.scale(22.0), 560.0);
}

#[test]
fn test_y_scale_is_inverted() {
    let data = weather();
    let humidity = FieldAccessor::new("humidity");
    let top = max(&data, &humidity).unwrap().unwrap();

    let y_scale = LinearScale::default()
        .with_domain((0.0, top))
        .with_range((280.0, 0.0))
        .nice(None);
    assert_eq!(y_scale.domain(), (0.0, 1.0));
    assert_approx_eq!(f64, y_scale.scale(1.0), 0.0);
    assert_approx_eq!(f64, y_scale.scale(0.0), 280.0);
}

#[test]
fn test_mean_marker_position() {
    let data = weather();
    let dew_point = FieldAccessor::new("dewPoint");
    let mean = mean(&data, &dew_point).unwrap().unwrap();
    assert_approx_eq!(f64, mean, 10.6, epsilon = 1e-9);

    let x_scale = LinearScale::default()
        .with_domain((-5.0, 25.0))
        .with_range((0.0, 300.0));
    assert_approx_eq!(f64, x_scale.scale(mean), 156.0, epsilon = 1e-9);
}
