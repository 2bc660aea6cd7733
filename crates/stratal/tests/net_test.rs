use stratal::{ArcKind, Net, NetError};

#[test]
fn add_origin_accepts_known_ids() {
    let mut net = Net::new();
    let p = net.add_place("p");
    let t = net.add_transition("t");
    assert!(net.add_origin(t, p, ArcKind::Normal).is_ok());
}

#[test]
fn add_origin_rejects_a_foreign_place() {
    let mut donor = Net::new();
    donor.add_place("a");
    let foreign = donor.add_place("b");

    let mut net = Net::new();
    net.add_place("only");
    let t = net.add_transition("t");

    let err = net.add_origin(t, foreign, ArcKind::Normal).unwrap_err();
    assert!(matches!(err, NetError::UnknownPlace(1)));
    assert_eq!(err.to_string(), "place #1 is not part of this net");
}

#[test]
fn add_target_rejects_a_foreign_transition() {
    let mut donor = Net::new();
    donor.add_transition("a");
    let foreign = donor.add_transition("b");

    let mut net = Net::new();
    let p = net.add_place("p");
    net.add_transition("only");

    let err = net.add_target(foreign, p, ArcKind::Normal).unwrap_err();
    assert!(matches!(err, NetError::UnknownTransition(1)));
}

#[test]
fn arcs_land_on_the_right_side() {
    let mut net = Net::new();
    let p1 = net.add_place("p1");
    let p2 = net.add_place("p2");
    let t = net.add_transition("t");
    net.add_origin(t, p1, ArcKind::Normal).unwrap();
    net.add_target(t, p2, ArcKind::Dumb).unwrap();

    let (_, tran) = net.transitions().next().unwrap();
    assert_eq!(tran.origins().len(), 1);
    assert_eq!(tran.origins()[0].place, p1);
    assert!(!tran.origins()[0].kind.is_dumb());
    assert_eq!(tran.targets().len(), 1);
    assert!(tran.targets()[0].kind.is_dumb());
}

#[test]
fn an_empty_net_reports_empty() {
    let net = Net::new();
    assert!(net.is_empty());
    assert_eq!(net.place_count(), 0);
    assert_eq!(net.transition_count(), 0);
}
