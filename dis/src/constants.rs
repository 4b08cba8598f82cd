use indexmap::IndexMap;

/// Well known C64 addresses, declared with `.label` when a program uses them.
#[rustfmt::skip]
pub const DEFAULT_CONSTANTS: &[(u16, &str)] = &[
    (0x0001, "PROCESSOR_PORT"),
    (0x0314, "KERNAL_IRQ_VECTOR"),
    (0x0318, "KERNAL_NMI_VECTOR"),
    // VIC-II
    (0xd011, "VIC_SCREEN_CONTROL_REGISTER_1"),
    (0xd012, "VIC_RASTER_LINE"),
    (0xd015, "VIC_SPRITE_ENABLE"),
    (0xd016, "VIC_SCREEN_CONTROL_REGISTER_2"),
    (0xd018, "VIC_MEMORY_SETUP_REGISTER"),
    (0xd019, "VIC_INTERRUPT_STATUS_REGISTER"),
    (0xd01a, "VIC_RASTER_INTERRUPT_CONTROL"),
    (0xd020, "VIC_BORDER_COLOR"),
    (0xd021, "VIC_BACKGROUND_COLOR_0"),
    (0xd022, "VIC_BACKGROUND_COLOR_1"),
    (0xd023, "VIC_BACKGROUND_COLOR_2"),
    (0xd024, "VIC_BACKGROUND_COLOR_3"),
    // SID
    (0xd418, "SID_VOLUME_AND_FILTER_MODE"),
    // CIA
    (0xdc00, "CIA1_DATA_PORT_A"),
    (0xdc01, "CIA1_DATA_PORT_B"),
    (0xdc0d, "INTERRUPT_CONTROL_AND_STATUS_REGISTER"),
    (0xdd00, "CIA2_DATA_PORT_A"),
    (0xdd0d, "CIA2_INTERRUPT_CONTROL_AND_STATUS_REGISTER"),
    // KERNAL
    (0xe544, "KERNAL_CLEAR_SCREEN"),
    (0xea31, "KERNAL_IRQ_HANDLER"),
    (0xea81, "KERNAL_IRQ_RETURN"),
    (0xffd2, "KERNAL_CHROUT"),
    (0xffe4, "KERNAL_GETIN"),
    (0xfffa, "NMI_VECTOR"),
    (0xfffe, "IRQ_VECTOR"),
];

pub fn default_constants() -> IndexMap<u16, String> {
    DEFAULT_CONSTANTS
        .iter()
        .map(|(addr, name)| (*addr, name.to_string()))
        .collect()
}
