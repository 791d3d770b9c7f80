use dialr_common::network::address::{Address, Scope, new_addresses};
use dialr_common::network::hostport::{
    self, HostPort, addresses_with_port, new_host_ports, parse_host_port, parse_host_ports,
};
use dialr_core::selection::{collapse, ensure_first, filter_unusable, sort_host_ports, unique};
use rand::seq::SliceRandom;

use super::fixtures::{assert_host_ports, many_host_ports, mixed_host_ports};

const MAX_TCP_PORT: usize = 65535;

/*************************************************************
                      Filter and collapse
**************************************************************/

#[test]
fn filter_unusable_keeps_order_and_drops_local() {
    let mut expected = new_host_ports(
        1234,
        [
            "localhost",
            "example.com",
            "example.org",
            "2001:db8::2",
            "example.net",
            "invalid host",
            "fd00::22",
            "2001:db8::1",
            "0.1.2.0",
            "2001:db8::1",
            "localhost",
            "10.0.0.1",
            "fc00::1",
            "172.16.0.1",
            "8.8.8.8",
            "7.8.8.8",
        ],
    );
    expected.extend(new_host_ports(9999, ["10.0.0.1", "2001:db8::1"]));

    let result = filter_unusable(&mixed_host_ports());
    assert_eq!(result.len(), expected.len());
    assert_eq!(result, expected);
}

#[test]
fn collapse_appends_servers_in_order() {
    let servers = vec![
        new_host_ports(
            1234,
            [
                "0.1.2.3", "10.0.1.2", "fc00::1", "2001:db8::1", "::1", "127.0.0.1", "localhost",
                "fe80::123", "example.com",
            ],
        ),
        new_host_ports(4321, ["8.8.8.8", "1.2.3.4", "fc00::2", "127.0.0.1", "foo"]),
        new_host_ports(9999, ["localhost", "127.0.0.1"]),
    ];
    let expected: Vec<HostPort> = servers.concat();

    let result = collapse(&servers);
    assert_eq!(result.len(), servers[0].len() + servers[1].len() + servers[2].len());
    assert_eq!(result, expected);
}

/*************************************************************
                          EnsureFirst
**************************************************************/

#[test]
fn ensure_first_host_port() {
    let first = new_host_ports(1234, ["1.2.3.4"]).remove(0);

    // Without any endpoints it still works.
    assert_eq!(ensure_first(&first, &[]), vec![first.clone()]);

    // Already on top: nothing changes.
    let hps = mixed_host_ports();
    assert_eq!(ensure_first(&hps[0], &hps), hps);

    // At the bottom: popped to the top.
    let mut first_last = hps.clone();
    first_last.push(first.clone());
    let mut expected = vec![first.clone()];
    expected.extend(hps);
    assert_eq!(ensure_first(&first, &first_last), expected);
}

/*************************************************************
                     Construction and parsing
**************************************************************/

#[test]
fn new_host_ports_equals_addresses_with_port() {
    let values = ["0.1.2.3", "fc00::1", "::1", "example.com"];
    let result = new_host_ports(42, values);
    assert_eq!(result.len(), values.len());
    assert_eq!(result, addresses_with_port(&new_addresses(values), 42));
}

#[test]
fn parse_host_ports_errors() {
    let cases = [
        ("", "as address:port: missing port in address"),
        (" ", "as address:port: missing port in address"),
        (":", "port: "),
        ("host", "as address:port: missing port in address"),
        ("host:port", "port: "),
        ("::1", "as address:port: too many colons in address"),
        ("1.2.3.4", "as address:port: missing port in address"),
        ("1.2.3.4:foo", "port: "),
    ];
    for (input, reason) in cases {
        let err = parse_host_ports([input]).unwrap_err();
        let prefix = format!("cannot parse {input:?} {reason}");
        assert!(err.to_string().starts_with(&prefix), "{input:?}: {err}");
    }

    let err = parse_host_ports(["1.2.3.4:42", "[fc00::1]:12", "foo"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"cannot parse "foo" as address:port: missing port in address"#
    );
}

#[test]
fn parse_host_ports_success() {
    let none: Vec<String> = Vec::new();
    assert_eq!(parse_host_ports(&none).unwrap(), Vec::<HostPort>::new());

    assert_eq!(
        parse_host_ports(["1.2.3.4:42"]).unwrap(),
        new_host_ports(42, ["1.2.3.4"])
    );
    assert_eq!(
        parse_host_ports(["[fc00::1]:1234"]).unwrap(),
        new_host_ports(1234, ["fc00::1"])
    );
    assert_eq!(
        parse_host_ports(["[fc00::1]:1234", "127.0.0.1:4321", "example.com:42"]).unwrap(),
        vec![
            HostPort::new(Address::new("fc00::1"), 1234),
            HostPort::new(Address::new("127.0.0.1"), 4321),
            HostPort::new(Address::new("example.com"), 42),
        ]
    );

    let hp = parse_host_port("1.2.3.4:42").unwrap();
    assert_eq!(hp.address().value(), "1.2.3.4");
    assert_eq!(hp.address().scope(), Scope::Public);
    assert_eq!(hp.port(), 42);
}

#[test]
fn every_fixture_round_trips_through_text() {
    for hp in mixed_host_ports() {
        assert_eq!(parse_host_port(&hp.to_string()).unwrap(), hp);
    }
}

#[test]
fn host_ports_to_strings() {
    let hps = mixed_host_ports();
    let strings = hostport::to_strings(&hps);
    assert_eq!(strings.len(), hps.len());
    assert_eq!(
        strings,
        vec![
            "127.0.0.1:1234",
            "localhost:1234",
            "example.com:1234",
            "127.0.1.1:1234",
            "example.org:1234",
            "[2001:db8::2]:1234",
            "169.254.1.1:1234",
            "example.net:1234",
            "invalid host:1234",
            "[fd00::22]:1234",
            "127.0.0.1:1234",
            "[2001:db8::1]:1234",
            "169.254.1.2:1234",
            "[ff01::22]:1234",
            "0.1.2.0:1234",
            "[2001:db8::1]:1234",
            "localhost:1234",
            "10.0.0.1:1234",
            "[::1]:1234",
            "[fc00::1]:1234",
            "[fe80::2]:1234",
            "172.16.0.1:1234",
            "[::1]:1234",
            "8.8.8.8:1234",
            "7.8.8.8:1234",
            "127.0.0.1:9999",
            "10.0.0.1:9999",
            "[2001:db8::1]:9999",
            "[fe80::2]:9999",
        ]
    );
}

/*************************************************************
                            Sorting
**************************************************************/

const SORTED: &[&str] = &[
    // Public IPv4 addresses on top.
    "0.1.2.0:1234",
    "7.8.8.8:1234",
    "8.8.8.8:1234",
    // After that public IPv6 addresses.
    "[2001:db8::1]:1234",
    "[2001:db8::1]:1234",
    "[2001:db8::1]:9999",
    "[2001:db8::2]:1234",
    // Then hostnames.
    "example.com:1234",
    "example.net:1234",
    "example.org:1234",
    "invalid host:1234",
    "localhost:1234",
    "localhost:1234",
    // Then IPv4 cloud-local addresses.
    "10.0.0.1:1234",
    "10.0.0.1:9999",
    "172.16.0.1:1234",
    // Then IPv6 cloud-local addresses.
    "[fc00::1]:1234",
    "[fd00::22]:1234",
    // Then machine-local IPv4 addresses.
    "127.0.0.1:1234",
    "127.0.0.1:1234",
    "127.0.0.1:9999",
    "127.0.1.1:1234",
    // Then machine-local IPv6 addresses.
    "[::1]:1234",
    "[::1]:1234",
    // Then link-local IPv4 addresses.
    "169.254.1.1:1234",
    "169.254.1.2:1234",
    // Finally, link-local IPv6 addresses.
    "[fe80::2]:1234",
    "[fe80::2]:9999",
    "[ff01::22]:1234",
];

#[test]
fn sort_host_ports_by_tier() {
    let mut hps = mixed_host_ports();
    sort_host_ports(&mut hps);
    assert_host_ports(&hps, SORTED);
}

#[test]
fn sort_host_ports_ignores_input_order() {
    let mut rng = rand::rng();
    for _ in 0..10 {
        let mut hps = mixed_host_ports();
        hps.shuffle(&mut rng);
        sort_host_ports(&mut hps);
        assert_host_ports(&hps, SORTED);
    }
}

/*************************************************************
                         Deduplication
**************************************************************/

#[test]
fn unique_host_ports_simple_input() {
    let input = new_host_ports(1234, ["127.0.0.1", "::1"]);
    assert_eq!(unique(&input), input);
}

#[test]
fn unique_host_ports_only_duplicates() {
    // All use the same IANA reserved port.
    let input = many_host_ports(10_000, |_| "127.0.0.1:49151".to_string());
    assert_eq!(unique(&input), input[0..1].to_vec());
}

#[test]
fn unique_host_ports_huge_unique_input() {
    let input = many_host_ports(MAX_TCP_PORT, |idx| format!("127.1.0.1:{}", idx + 1));
    let result = unique(&input);
    assert_eq!(result.len(), MAX_TCP_PORT);
    assert_eq!(result, input);
}

#[test]
fn unique_is_idempotent_on_fixture() {
    let once = unique(&mixed_host_ports());
    assert_eq!(unique(&once), once);
    assert_eq!(once.len(), 25);
}
