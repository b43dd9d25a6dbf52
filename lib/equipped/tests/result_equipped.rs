//! Behaviour of `ResultEquipped` as seen from client code.

use equipped::Abort;
use equipped::ResultEquipped;
use equipped::ResultKind;

use std::cell::Cell;
use std::rc::Rc;

type Res = ResultEquipped<i32,&'static str>;



// ==================
// === Inspection ===
// ==================

#[test]
fn variant_tests_are_exclusive() {
    for v in &[-1, 0, 42] {
        let ok = Res::new_ok(*v);
        assert!( ok.is_ok());
        assert!(!ok.is_err());
        assert_eq!(ok.kind(), ResultKind::Ok);
    }
    for e in &["", "io", "parse"] {
        let err = Res::new_err(*e);
        assert!( err.is_err());
        assert!(!err.is_ok());
        assert_eq!(err.kind(), ResultKind::Err);
    }
}

#[test]
fn contains_requires_matching_variant_and_value() {
    assert!( Res::new_ok(5).contains(&5));
    assert!(!Res::new_ok(5).contains(&6));
    assert!(!Res::new_err("5").contains(&5));
    assert!( Res::new_err("bad").contains_err(&"bad"));
    assert!(!Res::new_err("bad").contains_err(&"good"));
    assert!(!Res::new_ok(5).contains_err(&"bad"));

    let same : ResultEquipped<i32,i32> = ResultEquipped::new_err(5);
    assert!(!same.contains(&5));
    assert!( same.contains_err(&5));
}

/// Payloads are compared with `PartialEq`, so shared handles compare by the value they point to.
#[test]
fn contains_compares_payload_values() {
    let shared  = Rc::new(String::from("payload"));
    let other   = Rc::new(String::from("payload"));
    let wrapped : ResultEquipped<Rc<String>,()> = ResultEquipped::new_ok(shared.clone());
    assert!(wrapped.contains(&shared));
    assert!(wrapped.contains(&other));
    assert!(!Rc::ptr_eq(&shared,&other));
}



// =======================
// === Transformations ===
// =======================

#[test]
fn map_with_identity_keeps_the_wrapper() {
    assert_eq!(Res::new_ok(3).map(|v| v)          , Res::new_ok(3));
    assert_eq!(Res::new_err("e").map(|v| v)       , Res::new_err("e"));
    assert_eq!(Res::new_ok(3).map_err(|e| e)      , Res::new_ok(3));
    assert_eq!(Res::new_err("e").map_err(|e| e)   , Res::new_err("e"));
}

#[test]
fn map_skips_the_untouched_variant() {
    let calls = Cell::new(0);
    let mapped = Res::new_err("e").map(|v| { calls.set(calls.get() + 1); v.to_string() });
    assert_eq!(mapped, ResultEquipped::new_err("e"));
    let mapped = Res::new_ok(1).map_err(|e| { calls.set(calls.get() + 1); e.len() });
    assert_eq!(mapped, ResultEquipped::new_ok(1));
    assert_eq!(calls.get(), 0);

    assert_eq!(Res::new_ok(2).map(|v| v * 10), Res::new_ok(20));
    assert_eq!(Res::new_err("abc").map_err(str::len), ResultEquipped::new_err(3));
}

#[test]
fn map_or_uses_eager_default() {
    assert_eq!(Res::new_ok(2).map_or(|v| v * 2, 100)   , 4);
    assert_eq!(Res::new_err("e").map_or(|v| v * 2, 100), 100);
}

#[test]
fn map_or_else_computes_default_only_on_err() {
    let calls = Cell::new(0);
    let default = || { calls.set(calls.get() + 1); -1 };
    assert_eq!(Res::new_ok(2).map_or_else(|v| v + 1, default), 3);
    assert_eq!(calls.get(), 0);
    assert_eq!(Res::new_err("e").map_or_else(|v| v + 1, default), -1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn and_replaces_only_success() {
    assert_eq!(Res::new_ok(1).and(Err("z"))  , Res::new_err("z"));
    assert_eq!(Res::new_ok(1).and(Ok(2))     , Res::new_ok(2));
    assert_eq!(Res::new_err("q").and(Ok(1))  , Res::new_err("q"));
    assert_eq!(Res::new_err("q").and(Err("z")), Res::new_err("q"));
    assert_eq!(Res::new_ok(1).and(Ok("text")), ResultEquipped::new_ok("text"));
}

#[test]
fn and_then_short_circuits_on_err() {
    let calls = Cell::new(0);
    let step  = |v:i32| { calls.set(calls.get() + 1); if v > 0 { Ok(v * 2) } else { Err("neg") } };
    assert_eq!(Res::new_err("e").and_then(step), Res::new_err("e"));
    assert_eq!(calls.get(), 0);
    assert_eq!(Res::new_ok(4).and_then(step), Res::new_ok(8));
    assert_eq!(Res::new_ok(-4).and_then(step), Res::new_err("neg"));
    assert_eq!(calls.get(), 2);
}

#[test]
fn or_replaces_only_errors() {
    let ok  : ResultEquipped<i32,u8> = Res::new_ok(1).or(Err(7));
    let err : ResultEquipped<i32,u8> = Res::new_err("e").or(Err(7));
    assert_eq!(ok  , ResultEquipped::new_ok(1));
    assert_eq!(err , ResultEquipped::new_err(7));
    assert_eq!(Res::new_err("e").or::<()>(Ok(3)), ResultEquipped::new_ok(3));
}

#[test]
fn or_else_recovers_with_the_error() {
    let calls   = Cell::new(0);
    let recover = |e:&str| -> Result<i32,String> {
        calls.set(calls.get() + 1);
        if e == "soft" { Ok(0) } else { Err(e.to_uppercase()) }
    };
    assert_eq!(Res::new_ok(1).or_else(recover)      , ResultEquipped::new_ok(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(Res::new_err("soft").or_else(recover), ResultEquipped::new_ok(0));
    assert_eq!(Res::new_err("hard").or_else(recover), ResultEquipped::new_err("HARD".to_string()));
    assert_eq!(calls.get(), 2);
}

#[test]
fn option_views_discard_the_other_payload() {
    assert_eq!(Res::new_ok(1).ok().into_option()    , Some(1));
    assert!   (Res::new_err("e").ok().is_none());
    assert_eq!(Res::new_err("e").err().into_option(), Some("e"));
    assert!   (Res::new_ok(1).err().is_none());
}



// ==================
// === Extraction ===
// ==================

#[test]
fn unwrap_or_prefers_success() {
    assert_eq!(Res::new_ok(1).unwrap_or(9)   , 1);
    assert_eq!(Res::new_err("e").unwrap_or(9), 9);
}

#[test]
fn unwrap_or_else_calls_fallback_once_on_err() {
    let calls    = Cell::new(0);
    let fallback = || { calls.set(calls.get() + 1); 9 };
    assert_eq!(Res::new_ok(1).unwrap_or_else(fallback), 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(Res::new_err("e").unwrap_or_else(fallback), 9);
    assert_eq!(calls.get(), 1);
}

#[test]
fn unwrap_returns_success() {
    assert_eq!(Res::new_ok(11).unwrap(), 11);
    assert_eq!(Res::new_err("e").unwrap_err(), "e");
    assert_eq!(Res::new_ok(11).expect("present"), 11);
    assert_eq!(Res::new_err("e").expect_err("absent"), "e");
}

#[test]
#[should_panic(expected = "called `ResultEquipped::unwrap()` on an `Err` value: \"disk full\"")]
fn unwrap_on_err_aborts_with_payload() {
    Res::new_err("disk full").unwrap();
}

#[test]
#[should_panic(expected = "called `ResultEquipped::unwrap_err()` on an `Ok` value: 42")]
fn unwrap_err_on_ok_aborts_with_payload() {
    Res::new_ok(42).unwrap_err();
}

#[test]
#[should_panic(expected = "reading settings: \"no such file\"")]
fn expect_on_err_aborts_with_context() {
    Res::new_err("no such file").expect("reading settings");
}

#[test]
#[should_panic(expected = "should have failed: [1, 2]")]
fn expect_err_on_ok_aborts_with_context() {
    let res : ResultEquipped<Vec<i32>,()> = ResultEquipped::new_ok(vec![1,2]);
    res.expect_err("should have failed");
}

#[test]
fn abort_is_not_a_modeled_error() {
    let outcome = std::panic::catch_unwind(|| Res::new_err("boom").unwrap());
    let payload = outcome.expect_err("unwrap on Err must panic");
    let message = payload.downcast_ref::<String>().cloned().unwrap_or_default();
    let expected = Abort::with_payload("called `ResultEquipped::unwrap()` on an `Err` value","boom");
    assert_eq!(message, expected.message());
}



// ===============
// === Flatten ===
// ===============

#[test]
fn flatten_collapses_nested_results() {
    let ok_ok  : ResultEquipped<Result<i32,&str>,&str> = ResultEquipped::new_ok(Ok(7));
    let ok_err : ResultEquipped<Result<i32,&str>,&str> = ResultEquipped::new_ok(Err("x"));
    let err    : ResultEquipped<Result<i32,&str>,&str> = ResultEquipped::new_err("y");
    assert_eq!(ok_ok.flatten()  , Res::new_ok(7));
    assert_eq!(ok_err.flatten() , Res::new_err("x"));
    assert_eq!(err.flatten()    , Res::new_err("y"));
}

#[test]
fn flatten_keeps_plain_payloads() {
    assert_eq!(Res::new_ok(7).flatten()   , Res::new_ok(7));
    assert_eq!(Res::new_err("y").flatten(), Res::new_err("y"));
    let text : ResultEquipped<String,()> = ResultEquipped::new_ok("plain".into());
    assert_eq!(text.clone().flatten(), text);
    let list : ResultEquipped<Vec<u8>,()> = ResultEquipped::new_ok(vec![1]);
    assert_eq!(list.clone().flatten(), list);
}

#[derive(Clone,Debug,PartialEq)]
struct Point { x:i32, y:i32 }
equipped::impl_plain_result_shape!(Point);

#[derive(Clone,Debug,PartialEq)]
struct Tagged<T> { tag:&'static str, value:T }
equipped::impl_plain_result_shape!([T] Tagged<T>);

#[test]
fn flatten_keeps_user_payloads_after_opting_in() {
    let point : ResultEquipped<Point,&str> = ResultEquipped::new_ok(Point {x:1,y:2});
    assert_eq!(point.clone().flatten(), point);
    let tagged : ResultEquipped<Tagged<u8>,&str> = ResultEquipped::new_ok(Tagged {tag:"t",value:1});
    assert_eq!(tagged.clone().flatten(), tagged);
    let failed : ResultEquipped<Point,&str> = ResultEquipped::new_err("gone");
    assert_eq!(failed.flatten(), ResultEquipped::new_err("gone"));
}

#[test]
fn flatten_keeps_borrowed_and_compound_payloads() {
    let items = [1,2,3];
    let slice : ResultEquipped<&[i32],()> = ResultEquipped::new_ok(&items[..]);
    assert_eq!(slice.flatten(), ResultEquipped::new_ok(&items[..]));
    let triple : ResultEquipped<(i32,i32,i32),()> = ResultEquipped::new_ok((1,2,3));
    assert_eq!(triple.flatten(), ResultEquipped::new_ok((1,2,3)));
    let single : ResultEquipped<(char,),()> = ResultEquipped::new_ok(('a',));
    assert_eq!(single.flatten(), ResultEquipped::new_ok(('a',)));
    let array : ResultEquipped<[u8;4],()> = ResultEquipped::new_ok([0;4]);
    assert_eq!(array.flatten(), ResultEquipped::new_ok([0;4]));
    let mut map = std::collections::HashMap::new();
    map.insert("k",1);
    let table : ResultEquipped<std::collections::HashMap<&str,i32>,()> =
        ResultEquipped::new_ok(map.clone());
    assert_eq!(table.flatten(), ResultEquipped::new_ok(map));
    let kind : ResultEquipped<ResultKind,()> = ResultEquipped::new_ok(ResultKind::Err);
    assert_eq!(kind.flatten(), ResultEquipped::new_ok(ResultKind::Err));
}
