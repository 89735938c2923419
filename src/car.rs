use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The product being assembled.
///
/// Every slot starts unset. Slots are written only by the [`CarBuilder`](crate::CarBuilder)
/// that owns the car; callers read them through the accessors.
///
/// `Car` is serializable but not deserializable, so slots cannot be filled from outside:
///
/// ```compile_fail
/// use car_builder::Car;
///
/// let car: Car = serde_json::from_str(r#"{"engine":"V8","wheels":null,"body":null}"#).unwrap();
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Car {
    pub(crate) engine: Option<String>,
    pub(crate) wheels: Option<String>,
    pub(crate) body: Option<String>,
}

impl Car {
    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn wheels(&self) -> Option<&str> {
        self.wheels.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car {{ engine: {}, wheels: {}, body: {} }}",
            self.engine().unwrap_or("-"),
            self.wheels().unwrap_or("-"),
            self.body().unwrap_or("-")
        )
    }
}

/// A handle to the car owned by a [`CarBuilder`](crate::CarBuilder).
///
/// Cloning the handle does not clone the car: all handles finalized from one builder
/// point at the same [`Car`], and later setter calls on that builder show up through
/// each of them. Use [`snapshot`](Self::snapshot) for a detached copy.
///
/// The handle is `Rc`-based, so it cannot cross threads. Handles only come from
/// [`CarBuilder::finalize`](crate::CarBuilder::finalize):
///
/// ```compile_fail
/// use car_builder::SharedCar;
///
/// let orphan = SharedCar::default();
/// ```
#[derive(Clone, Debug)]
pub struct SharedCar(Rc<RefCell<Car>>);

impl SharedCar {
    pub(crate) fn new() -> Self {
        Self(Rc::default())
    }

    /// Runs `f` against the underlying car. Only the owning builder writes through here.
    pub(crate) fn update(&self, f: impl FnOnce(&mut Car)) {
        f(&mut self.0.borrow_mut());
    }

    pub fn engine(&self) -> Option<String> {
        self.0.borrow().engine.clone()
    }

    pub fn wheels(&self) -> Option<String> {
        self.0.borrow().wheels.clone()
    }

    pub fn body(&self) -> Option<String> {
        self.0.borrow().body.clone()
    }

    /// Returns an owned copy of the car as it is right now, detached from the builder.
    pub fn snapshot(&self) -> Car {
        self.0.borrow().clone()
    }

    /// Returns `true` when both handles point at the same car.
    pub fn ptr_eq(&self, other: &SharedCar) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for SharedCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0.borrow(), f)
    }
}

/// Returns `true` when every handle points at the same car. An empty set counts as aliased.
pub fn all_aliased<'a>(cars: impl IntoIterator<Item = &'a SharedCar>) -> bool {
    let mut cars = cars.into_iter();
    match cars.next() {
        Some(first) => cars.all(|car| car.ptr_eq(first)),
        None => true,
    }
}
