// tests/director_presets.rs
use car_builder::{AssemblyStep, CarBuilder, CarDirector, ParsePresetError, Preset, Recipe};

fn setup() -> (CarDirector, CarBuilder) {
    (CarDirector::new(), CarBuilder::new())
}

#[test]
fn test_sport_configuration() {
    let (director, mut builder) = setup();
    let car = director.build_sport_configuration(&mut builder);

    assert_eq!(car.body().as_deref(), Some("Ferrari"));
    assert_eq!(car.engine().as_deref(), Some("V8"));
    assert_eq!(car.wheels().as_deref(), Some("Michelin"));
}

#[test]
fn test_suv_configuration() {
    let (director, mut builder) = setup();
    let car = director.build_suv_configuration(&mut builder);

    assert_eq!(car.body().as_deref(), Some("Tesla"));
    assert_eq!(car.engine().as_deref(), Some("Electric"));
    assert_eq!(car.wheels().as_deref(), Some("Michelin"));
}

#[test]
fn test_recipe_order() {
    // Body first, then engine, then wheels.
    assert_eq!(
        Preset::Sport.recipe().steps,
        vec![
            AssemblyStep::Body("Ferrari".into()),
            AssemblyStep::Engine("V8".into()),
            AssemblyStep::Wheels("Michelin".into()),
        ]
    );
    assert_eq!(Preset::Suv.recipe(), Recipe::suv());
}

#[test]
fn test_director_uses_callers_builder() {
    let (director, mut builder) = setup();
    let before = builder.finalize();

    let sport = director.build_sport_configuration(&mut builder);
    assert!(sport.ptr_eq(&before), "Director must finalize the caller's builder");
    assert_eq!(before.body().as_deref(), Some("Ferrari"));

    // Reusing the same builder overwrites the sport car.
    let suv = director.build_suv_configuration(&mut builder);
    assert!(suv.ptr_eq(&sport));
    assert_eq!(sport.body().as_deref(), Some("Tesla"));
    assert_eq!(sport.engine().as_deref(), Some("Electric"));
}

#[test]
fn test_fresh_builders_give_independent_cars() {
    let director = CarDirector::new();
    let sport = director.build_sport_configuration(&mut CarBuilder::new());
    let suv = director.build_suv_configuration(&mut CarBuilder::new());

    assert!(!sport.ptr_eq(&suv));
    assert_eq!(sport.body().as_deref(), Some("Ferrari"));
    assert_eq!(suv.body().as_deref(), Some("Tesla"));
}

#[test]
fn test_recipe_overwrites_prior_parts() {
    let (director, mut builder) = setup();
    builder.set_engine("V12");

    let car = director.construct(
        Preset::Sport,
        builder.set_wheels("Pirelli").set_body("Maserati"),
    );

    // Every sport step overwrites; nothing from before survives.
    assert_eq!(car.engine().as_deref(), Some("V8"));
    assert_eq!(car.wheels().as_deref(), Some("Michelin"));
    assert_eq!(car.body().as_deref(), Some("Ferrari"));
}

#[test]
fn test_preset_from_str() {
    assert_eq!("sport".parse::<Preset>(), Ok(Preset::Sport));
    assert_eq!(" SUV ".parse::<Preset>(), Ok(Preset::Suv));
    assert_eq!(
        "truck".parse::<Preset>(),
        Err(ParsePresetError::Unknown {
            name: "truck".to_string()
        })
    );
}

#[test]
fn test_preset_names_round_trip() {
    for preset in Preset::ALL {
        assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
    }
}

#[test]
fn test_unknown_preset_message() {
    let err = "truck".parse::<Preset>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown preset `truck` (expected one of: sport, suv)"
    );
}
