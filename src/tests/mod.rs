use std::sync::Arc;

use crate::PhoneNumberUtil;

pub(crate) mod test_metadata;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn get_phone_util() -> PhoneNumberUtil {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
    PhoneNumberUtil::new(Arc::new(test_metadata::test_metadata_provider()))
}
