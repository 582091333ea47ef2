/// Integration tests for the application layer
mod test_utilities;

use raidtool::prelude::*;
use test_utilities::mocks::*;

const LSPCI_3WARE: &str = "\
00:00.0 Host bridge [0600]: Intel Corporation 5000P Chipset Memory Controller Hub [8086:25d8]
03:00.0 RAID bus controller [0104]: 3ware Inc 9650SE SATA-II RAID PCIe [13c1:1004]
";

const LSHW_DISKS: &str = r#"
{
  "id" : "disk:0",
  "class" : "disk",
  "logicalname" : "/dev/sda",
  "businfo" : "scsi@0:0.0.0",
  "product" : "ST31000524AS"
},
{
  "id" : "disk:1",
  "class" : "disk",
  "logicalname" : "/dev/sdb",
  "businfo" : "scsi@1:0.2.0",
  "product" : "ST31000524AS"
}
"#;

const UNIT_LISTING_SINGLE: &str = "\
Unit  UnitType  Status         %RCmpl  %V/I/M  VPort Stripe  Size(GB)
------------------------------------------------------------------------
u2    SINGLE    OK             -       -       p3    -       931.312
";

// End-to-end scenario from the tool's documented behavior: a 3ware
// controller, /dev/sdb attached at scsi@1:0.2.0, one SINGLE unit on
// virtual port p3, controller answering wwn=5000C500123456.
#[test]
fn test_resolve_wwn_happy_path() {
    let runner = MockCommandRunner::new()
        .on("lspci -nn", LSPCI_3WARE)
        .on("lshw -class disk -json", LSHW_DISKS)
        .on("tw-cli /c1/u2 show", UNIT_LISTING_SINGLE)
        .on("tw-cli /c1/p3 show wwn", "wwn=5000C500123456\n");

    let use_case = ResolveWwnUseCase::new(runner);
    let response = use_case
        .execute(WwnRequest::new("/dev/sdb".to_string()))
        .unwrap();

    assert_eq!(response.wwn, "5000C500123456");
    assert_eq!(response.vendor, Vendor::ThreeWare);
}

#[test]
fn test_resolve_wwn_first_disk_on_controller_zero() {
    let runner = MockCommandRunner::new()
        .on("lspci -nn", LSPCI_3WARE)
        .on("lshw -class disk -json", LSHW_DISKS)
        .on(
            "tw-cli /c0/u0 show",
            "\
Unit  UnitType  Status         %RCmpl  %V/I/M  VPort Stripe  Size(GB)
------------------------------------------------------------------------
u0    SINGLE    OK             -       -       p0    -       931.312
",
        )
        .on("tw-cli /c0/p0 show wwn", "wwn = 5000C500AABBCC\n");

    let use_case = ResolveWwnUseCase::new(runner);
    let response = use_case
        .execute(WwnRequest::new("/dev/sda".to_string()))
        .unwrap();

    assert_eq!(response.wwn, "5000C500AABBCC");
}

#[test]
fn test_no_raid_controller_present() {
    let runner = MockCommandRunner::new().on(
        "lspci -nn",
        "00:00.0 Host bridge [0600]: Intel Corporation 5000P [8086:25d8]\n",
    );

    let use_case = ResolveWwnUseCase::new(runner);
    let result = use_case.execute(WwnRequest::new("/dev/sdb".to_string()));

    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Unable to find a RAID device"));
}

#[test]
fn test_unknown_vendor_id() {
    let runner = MockCommandRunner::new().on(
        "lspci -nn",
        "03:00.0 RAID bus controller [0104]: Mystery Corp SuperRAID [ffff:0001]\n",
    );

    let use_case = ResolveWwnUseCase::new(runner);
    let result = use_case.execute(WwnRequest::new("/dev/sdb".to_string()));

    assert!(result.is_err());
    let display = format!("{}", result.unwrap_err());
    assert!(display.contains("Unknown RAID vendor id"));
    assert!(display.contains("ffff"));
}

#[test]
fn test_blockdev_missing_from_inventory() {
    let runner = MockCommandRunner::new()
        .on("lspci -nn", LSPCI_3WARE)
        .on(
            "lshw -class disk -json",
            r#"{"logicalname" : "/dev/sda", "businfo" : "scsi@0:0.0.0"}"#,
        );

    let use_case = ResolveWwnUseCase::new(runner);
    let result = use_case.execute(WwnRequest::new("/dev/sdb".to_string()));

    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Could not find businfo for /dev/sdb"));
}

#[test]
fn test_raided_unit_is_rejected() {
    let raid_listing = "\
Unit  UnitType  Status         %RCmpl  %V/I/M  VPort Stripe  Size(GB)
------------------------------------------------------------------------
u2    RAID5     OK             -       -       p3    64K     2793.94
";
    let runner = MockCommandRunner::new()
        .on("lspci -nn", LSPCI_3WARE)
        .on("lshw -class disk -json", LSHW_DISKS)
        .on("tw-cli /c1/u2 show", raid_listing);

    let use_case = ResolveWwnUseCase::new(runner);
    let result = use_case.execute(WwnRequest::new("/dev/sdb".to_string()));

    assert!(result.is_err());
    assert!(
        format!("{}", result.unwrap_err()).contains("Cannot retrieve wwn for raided blockdevs")
    );
}

#[test]
fn test_empty_unit_listing_fails() {
    let runner = MockCommandRunner::new()
        .on("lspci -nn", LSPCI_3WARE)
        .on("lshw -class disk -json", LSHW_DISKS)
        .on(
            "tw-cli /c1/u2 show",
            "Unit  UnitType  Status\n----------------------\n",
        );

    let use_case = ResolveWwnUseCase::new(runner);
    let result = use_case.execute(WwnRequest::new("/dev/sdb".to_string()));

    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Unable to get wwn"));
}

#[test]
fn test_lsi_controller_reports_unimplemented() {
    let runner = MockCommandRunner::new()
        .on(
            "lspci -nn",
            "02:00.0 RAID bus controller [0104]: LSI Logic MegaRAID SAS 2108 [1000:0079]\n",
        )
        .on("lshw -class disk -json", LSHW_DISKS);

    let use_case = ResolveWwnUseCase::new(runner);
    let result = use_case.execute(WwnRequest::new("/dev/sdb".to_string()));

    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("not implemented for LSI controllers"));
}

#[test]
fn test_command_failure_aborts_chain() {
    // lspci succeeds, lshw has no canned output and so fails
    let runner = MockCommandRunner::new().on("lspci -nn", LSPCI_3WARE);

    let use_case = ResolveWwnUseCase::new(runner);
    let result = use_case.execute(WwnRequest::new("/dev/sdb".to_string()));

    assert!(result.is_err());
}

// Direct handler test: the handler is usable without the detection chain
#[test]
fn test_three_ware_handler_standalone() {
    let runner = MockCommandRunner::new()
        .on("tw-cli /c2/u5 show", "\
Unit  UnitType  Status         %RCmpl  %V/I/M  VPort Stripe  Size(GB)
------------------------------------------------------------------------
u5    SINGLE    OK             -       -       p7    -       465.651
")
        .on("tw-cli /c2/p7 show wwn", "wwn=50014EE2B1234567\n");

    let handler = ThreeWareHandler::new(runner);
    assert_eq!(
        handler.resolve_wwn("scsi@2:0.5.0").unwrap(),
        "50014EE2B1234567"
    );
}
