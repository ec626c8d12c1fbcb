use librc522::clock::MockDelay;
use librc522::device::{Device, DeviceBuilder, DriverConfig, TimerConfig};
use librc522::registers::Register;
use librc522::transport::MockTransport;

#[test]
fn uninitialized_device_can_talk_registers() {
    let mock = MockTransport::new();
    let mut dev = Device::new_with_transport(Box::new(mock.clone()), Box::new(MockDelay::new()));
    assert_eq!(dev.version().unwrap(), 0x92);
    dev.write_register(Register::TReloadLow, 0x10).unwrap();
    dev.set_bits(Register::TReloadLow, 0x01).unwrap();
    dev.clear_bits(Register::TReloadLow, 0x10).unwrap();
    assert_eq!(mock.register(Register::TReloadLow), 0x01);
}

#[test]
fn initialize_applies_custom_timer() {
    crate::common::init_logging();
    let mock = MockTransport::new();
    let config = DriverConfig {
        timer: TimerConfig {
            mode: 0x80,
            prescaler: 0xA9,
            reload: 0x03E8,
        },
        ..DriverConfig::default()
    };
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_delay(Box::new(MockDelay::new()))
        .with_config(config)
        .build()
        .unwrap();
    assert_eq!(mock.register(Register::TMode), 0x80);
    assert_eq!(mock.register(Register::TPrescaler), 0xA9);
    assert_eq!(mock.register(Register::TReloadHigh), 0x03);
    assert_eq!(mock.register(Register::TReloadLow), 0xE8);
    assert_eq!(mock.register(Register::TxAsk), 0x40);
    assert_eq!(mock.register(Register::Mode), 0x3D);
    assert!(dev.antenna_enabled().unwrap());
}

#[test]
fn initialize_propagates_bus_failure() {
    let mock = MockTransport::new();
    mock.fail_after(3);
    let result = Device::new_with_transport(Box::new(mock), Box::new(MockDelay::new())).initialize();
    assert!(matches!(result, Err(librc522::Error::Transport(_))));
}

#[test]
fn into_transport_hands_back_the_bus() {
    let mock = MockTransport::new();
    let dev = Device::new_with_transport(Box::new(mock.clone()), Box::new(MockDelay::new()))
        .initialize()
        .unwrap();
    let mut transport = dev.into_transport();
    assert_eq!(transport.read_register(Register::Version).unwrap(), 0x92);
}
