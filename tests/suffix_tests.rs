//! Integration tests for suffix resolution against the bundled list

use psl_engine::{default_rules, RuleTrie};

/// (hostname, expected public suffix)
fn known_suffixes() -> Vec<(&'static str, &'static str)> {
    vec![
        ("example.com", "com"),
        ("www.example.com", "com"),
        ("a.b.c.example.com", "com"),
        ("example.co.uk", "co.uk"),
        ("www.example.co.uk", "co.uk"),
        ("example.uk", "uk"),
        ("www.bbc.co.uk", "co.uk"),
        ("school.sch.uk", "school.sch.uk"),
        ("www.school.sch.uk", "school.sch.uk"),
        ("example.com.au", "com.au"),
        ("example.github.io", "github.io"),
        ("raw.githubusercontent.com", "githubusercontent.com"),
        ("foo.blogspot.com", "blogspot.com"),
        ("foo.blogspot.co.uk", "blogspot.co.uk"),
        ("my-app.herokuapp.com", "herokuapp.com"),
        ("site.pages.dev", "pages.dev"),
        ("www.ec2-1-2-3-4.compute-1.amazonaws.com", "ec2-1-2-3-4.compute-1.amazonaws.com"),
        ("host.us-east-1.compute.amazonaws.com", "us-east-1.compute.amazonaws.com"),
        ("test.k12.ca.us", "k12.ca.us"),
        ("example.ca.us", "ca.us"),
        ("foo.ck", "foo.ck"),
        ("bar.foo.ck", "foo.ck"),
        ("www.ck", "ck"),
        ("sub.www.ck", "ck"),
        ("test.kobe.jp", "test.kobe.jp"),
        ("city.kobe.jp", "kobe.jp"),
        ("www.city.kobe.jp", "kobe.jp"),
        ("example.co.jp", "co.jp"),
        ("something.unknownzz", "unknownzz"),
    ]
}

#[test]
fn test_bundled_public_suffixes() {
    let trie = default_rules();
    for (hostname, expected) in known_suffixes() {
        assert_eq!(
            trie.public_suffix(hostname),
            Some(expected),
            "public suffix of {}",
            hostname
        );
    }
}

#[test]
fn test_bundled_is_public_suffix() {
    let trie = default_rules();
    assert!(trie.is_public_suffix("com"));
    assert!(trie.is_public_suffix("co.uk"));
    assert!(trie.is_public_suffix("github.io"));
    assert!(trie.is_public_suffix("foo.ck"));
    assert!(!trie.is_public_suffix("www.ck"));
    assert!(!trie.is_public_suffix("example.com"));
    assert!(!trie.is_public_suffix("example.github.io"));
}

#[test]
fn test_bundled_tld_exists() {
    let trie = default_rules();
    for tld in ["com", "org", "uk", "jp", "io", "ck", "za"] {
        assert!(trie.tld_exists(tld), "{} should exist", tld);
        assert!(
            trie.tld_exists(&format!("example.{}", tld)),
            "example.{} should exist",
            tld
        );
    }
    assert!(!trie.tld_exists("example.unknownzz"));
    assert!(!trie.tld_exists("kobe"));
}

#[test]
fn test_json_round_trip_resolves_identically() {
    let trie = default_rules();
    let reloaded = RuleTrie::from_json(&trie.to_json()).unwrap();
    assert_eq!(*trie, reloaded);

    for (hostname, expected) in known_suffixes() {
        assert_eq!(reloaded.public_suffix(hostname), Some(expected));
    }
}

#[test]
fn test_concurrent_lookups_share_trie() {
    let trie = default_rules();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let trie = trie.clone();
            std::thread::spawn(move || {
                let host = format!("host{}.example.co.uk", i);
                trie.public_suffix(&host).map(str::to_string)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("co.uk"));
    }
}
