#![allow(clippy::unwrap_used, reason = "Unwrap is not an issue in tests")]

use std::thread;

use sddl_decoder::{Decoder, SddlError, decode};

#[test]
fn file_system_descriptor() {
    let permissions = decode(
        "O:S-1-5-80-956008885-3418522649-1831038044-1853292631-2271478464\
         G:S-1-5-80-956008885-3418522649-1831038044-1853292631-2271478464\
         D:PAI(A;;FA;;;S-1-5-80-956008885-3418522649-1831038044-1853292631-2271478464)\
         (A;CIIO;GA;;;S-1-5-80-956008885-3418522649-1831038044-1853292631-2271478464)\
         (A;;0x1301bf;;;SY)(A;OICIIO;GA;;;SY)(A;;0x1200a9;;;BA)",
    )
    .unwrap();

    assert_eq!(permissions.owner(), Some("Trusted Installer"), "owner");
    assert_eq!(permissions.primary(), Some("Trusted Installer"), "group");
    assert_eq!(
        permissions.dacl_inheritance_flags(),
        ["DDL_PROTECTED", "SDDL_AUTO_INHERITED"],
        "dacl flags"
    );

    let dacl = permissions.dacl();
    assert_eq!(dacl.len(), 5, "five entries");
    assert_eq!(dacl[1].ace_flags(), ["CONTAINER INHERIT", "INHERITANCE ONLY"], "CIIO");
    assert_eq!(
        dacl[3].ace_flags(),
        ["OBJECT INHERIT", "CONTAINER INHERIT", "INHERITANCE ONLY"],
        "OICIIO"
    );
    assert_eq!(
        dacl[2].rights(),
        ["0x", "13", "01", "bf"],
        "hex masks are not interpreted"
    );
    assert_eq!(dacl[4].account_sid(), "Built-in administrators", "last trustee");
    assert!(permissions.sacl().is_empty(), "no SACL");
}

#[test]
fn audit_descriptor() {
    let permissions = decode("S:AI(AU;SAFA;FA;;;WD)(OU;FA;CR;;;AN)").unwrap();
    assert!(permissions.owner().is_none(), "no owner");
    assert!(permissions.dacl().is_empty(), "no DACL");
    assert_eq!(permissions.sacl_inheritance_flags(), ["SDDL_AUTO_INHERITED"], "sacl flags");
    let sacl = permissions.sacl();
    assert_eq!(sacl[0].ace_type(), "SYSTEM AUDIT", "audit ace");
    assert_eq!(
        sacl[0].ace_flags(),
        ["SUCCESSFUL ACCESS AUDIT", "FAILED ACCESS AUDIT"],
        "audit flags"
    );
    assert_eq!(sacl[1].ace_type(), "OBJECT SYSTEM AUDIT", "object audit");
    assert_eq!(sacl[1].rights(), ["ADS_RIGHT_DS_CONTROL_ACCESS"], "control access");
    assert_eq!(sacl[1].account_sid(), "Anonymous logon", "trustee");
}

#[test]
fn well_known_literal_sid() {
    let permissions = decode("O:S-1-5-18G:S-1-5-32-544").unwrap();
    assert_eq!(permissions.owner(), Some("Local System"), "literal owner");
    assert_eq!(permissions.primary(), Some("Administrators"), "literal group");
}

#[test]
fn prefix_of_well_known_sid_is_not_matched() {
    let permissions = decode("O:S-1-5-32-5440").unwrap();
    assert_eq!(permissions.owner(), Some("S-1-5-32-5440"), "no prefix match");
}

#[test]
fn protected_acl_without_entries() {
    let permissions = decode("D:P").unwrap();
    assert_eq!(permissions.dacl_inheritance_flags(), ["DDL_PROTECTED"], "flag only");
    assert!(permissions.dacl().is_empty(), "no entries");
}

#[test]
fn empty_parentheses_are_malformed() {
    assert_eq!(
        decode("D:(A;;FA;;;WD)()"),
        Err(SddlError::MalformedAce { index: 1, found: 1 }),
        "`()` is not an ACE"
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        decode("D:(A;;RP)").unwrap_err().to_string(),
        "malformed ACE #0: expected 6 `;`-separated fields, found 3",
        "malformed ACE"
    );
    assert_eq!(
        SddlError::UnknownSection('X').to_string(),
        "unknown SDDL section `X:`",
        "unknown section"
    );
}

#[test]
fn concurrent_decodes_are_independent() {
    const INPUTS: [&str; 4] = [
        "O:BAG:SYD:(A;;FA;;;WD)",
        "D:PAI(D;;GA;;;BG)",
        "O:S-1-5-21-123-456-789-1001",
        "D:(A;CIOI;FR;;;AU)",
    ];
    let decoder = Decoder::new();
    let expected: Vec<_> = INPUTS.iter().map(|sddl| decoder.decode(sddl).unwrap()).collect();

    let handles: Vec<_> = INPUTS
        .iter()
        .map(|&sddl| thread::spawn(move || decoder.decode(sddl).unwrap()))
        .collect();
    let decoded: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();

    assert_eq!(decoded, expected, "threads see the same results");
}

#[test]
fn unknown_inheritance_flag_starting_with_p() {
    let permissions = decode("D:PX(A;;FA;;;WD)").unwrap();
    assert_eq!(permissions.dacl_inheritance_flags(), ["PX"], "PX kept raw");
    assert_eq!(permissions.dacl()[0].rights(), ["FILE_ALL_ACCESS"], "ace intact");
}
