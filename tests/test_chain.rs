use prototypal::{error::RuntimeError, Object, Realm, Value, ValueType};
use test_case::test_case;

/// Build a small delegation hierarchy and check membership at every level:
/// canine <- dog <- my_dog, plus an unrelated empty object in the same
/// realm.
#[test]
fn test_delegation_hierarchy() {
    let realm = Realm::new();
    let canine = realm.new_object();
    canine.insert("barks", true);
    let dog = Object::create(canine.clone());
    dog.insert("fetches", true);
    let my_dog = Object::create(dog.clone());
    my_dog.insert("name", "Rex");
    let empty = realm.new_object();

    let canine = Value::Object(canine);
    let dog = Value::Object(dog);
    let my_dog = Value::Object(my_dog);
    let empty = Value::Object(empty);

    // Every ancestor is a prototype of the leaf
    assert!(canine.is_prototype_of(&my_dog).unwrap());
    assert!(dog.is_prototype_of(&my_dog).unwrap());
    assert!(canine.is_prototype_of(&dog).unwrap());
    // Membership is directional
    assert!(!my_dog.is_prototype_of(&canine).unwrap());
    assert!(!dog.is_prototype_of(&canine).unwrap());
    // The unrelated object shares only the realm root
    assert!(!canine.is_prototype_of(&empty).unwrap());
    assert!(!empty.is_prototype_of(&my_dog).unwrap());
    let root = Value::Object(realm.object_prototype().clone());
    assert!(root.is_prototype_of(&my_dog).unwrap());
    assert!(root.is_prototype_of(&empty).unwrap());
    // The root isn't in its own chain
    assert!(!root.is_prototype_of(&root).unwrap());
}

/// Properties delegate along the same chain that membership walks
#[test]
fn test_property_delegation() {
    let realm = Realm::new();
    let canine = realm.new_object();
    canine.insert("barks", true);
    let my_dog = Object::create(Object::create(canine));
    my_dog.insert("name", "Rex");

    assert_eq!(my_dog.get("name"), "Rex".into());
    assert_eq!(my_dog.get("barks"), true.into());
    assert_eq!(my_dog.get("wings"), Value::Undefined);
    assert!(my_dog.has("barks"));
    assert!(!my_dog.has_own("barks"));
    assert_eq!(my_dog.get_own("barks"), Value::Undefined);
}

#[test_case(Value::Undefined, "undefined"; "undefined")]
#[test_case(Value::Null, "null"; "null")]
fn test_nullish_candidate(candidate: Value, type_name: &str) {
    let realm = Realm::new();
    let target = Value::Object(realm.new_object());
    let error = candidate.is_prototype_of(&target).unwrap_err();
    assert_eq!(
        error.to_string(),
        format!("Cannot read property 'isPrototypeOf' of {type_name}")
    );
    assert!(matches!(
        error,
        RuntimeError::Nullish {
            property: "isPrototypeOf",
            value: ValueType::Undefined | ValueType::Null,
        }
    ));
}

#[test_case(Value::Undefined; "undefined")]
#[test_case(Value::Null; "null")]
#[test_case(false.into(); "boolean")]
#[test_case(42.into(); "number")]
#[test_case("rex".into(); "string")]
fn test_primitive_target(target: Value) {
    let realm = Realm::new();
    let candidate = Value::Object(realm.object_prototype().clone());
    assert!(!candidate.is_prototype_of(&target).unwrap());
}

/// Functions created through a realm sit under the function prototype,
/// which itself sits under the object prototype
#[test]
fn test_function_chain() {
    let realm = Realm::new();
    let greet = realm.function("greet", |arguments| {
        let name: String =
            arguments.first().cloned().unwrap_or_default().convert()?;
        Ok(format!("Hello, {name}!").into())
    });

    let result = greet.call(&["Rex".into()]).unwrap();
    assert_eq!(result, "Hello, Rex!".into());
    // Conversion failures inside the body surface as runtime errors
    let error = greet.call(&[Value::Null]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Type error: expected string, received null"
    );

    let greet = Value::Function(greet);
    let function_prototype =
        Value::Object(realm.function_prototype().clone());
    let object_prototype = Value::Object(realm.object_prototype().clone());
    assert!(function_prototype.is_prototype_of(&greet).unwrap());
    assert!(object_prototype.is_prototype_of(&greet).unwrap());
    // Functions can be targets but never candidates for a match: only
    // objects appear as chain links
    let plain = Value::Object(realm.new_object());
    assert!(!greet.is_prototype_of(&plain).unwrap());
}

#[test]
fn test_array_chain() {
    let realm = Realm::new();
    let array = realm.new_array();
    array.push("bone");
    let array = Value::Array(array);
    let array_prototype = Value::Object(realm.array_prototype().clone());
    let object_prototype = Value::Object(realm.object_prototype().clone());
    assert!(array_prototype.is_prototype_of(&array).unwrap());
    assert!(object_prototype.is_prototype_of(&array).unwrap());

    // An array built outside the realm has no chain at all
    let bare = Value::Array(vec![Value::from(1)].into());
    assert!(!array_prototype.is_prototype_of(&bare).unwrap());
    assert!(!object_prototype.is_prototype_of(&bare).unwrap());
}

/// Each realm's roots are distinct objects, so membership never crosses
/// realms even though the roots are structurally identical
#[test]
fn test_realm_isolation() {
    let first = Realm::new();
    let second = Realm::new();
    let stray = Value::Object(second.new_object());
    let first_root = Value::Object(first.object_prototype().clone());
    let second_root = Value::Object(second.object_prototype().clone());
    assert!(!first_root.is_prototype_of(&stray).unwrap());
    assert!(second_root.is_prototype_of(&stray).unwrap());
}

/// The prototype accessor exposes one step of the same walk
#[test]
fn test_prototype_accessor() {
    let realm = Realm::new();
    let object = Value::Object(realm.new_object());
    let parent = object.prototype().unwrap();
    assert!(parent.ptr_eq(realm.object_prototype()));
    // The root has no parent, and primitives have none either
    assert!(Value::Object(parent).prototype().is_none());
    assert!(Value::from(3).prototype().is_none());
    assert!(Value::Null.prototype().is_none());
}
