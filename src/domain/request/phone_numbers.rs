use super::{Descriptor, PathRoles, QueryFields};

const INCOMING: &str = "/IncomingPhoneNumbers";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List phone numbers owned by the account.
pub struct IncomingPhoneNumbers {
    pub phone_number: String,
    pub friendly_name: String,
    pub page_size: String,
}

impl Descriptor for IncomingPhoneNumbers {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(INCOMING)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("PhoneNumber", &self.phone_number)
            .one("FriendlyName", &self.friendly_name)
            .one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingPhoneNumber {
    pub sid: String,
}

impl Descriptor for IncomingPhoneNumber {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(INCOMING).sid(&self.sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Buy a phone number.
///
/// Set `phone_number` to buy a specific number found through [`AvailablePhoneNumbers`], or
/// `area_code` to let Twilio pick one.
pub struct CreateIncomingPhoneNumber {
    pub phone_number: String,
    pub area_code: String,
    pub friendly_name: String,
    pub voice_url: String,
    pub voice_method: String,
    pub voice_fallback_url: String,
    pub sms_url: String,
    pub sms_method: String,
    pub status_callback: String,
    pub status_callback_method: String,
}

impl Descriptor for CreateIncomingPhoneNumber {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(INCOMING)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("PhoneNumber", &self.phone_number)
            .one("AreaCode", &self.area_code)
            .one("FriendlyName", &self.friendly_name)
            .one("VoiceUrl", &self.voice_url)
            .one("VoiceMethod", &self.voice_method)
            .one("VoiceFallbackUrl", &self.voice_fallback_url)
            .one("SmsUrl", &self.sms_url)
            .one("SmsMethod", &self.sms_method)
            .one("StatusCallback", &self.status_callback)
            .one("StatusCallbackMethod", &self.status_callback_method)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Search numbers available for purchase.
///
/// The path is `/AvailablePhoneNumbers/{country_code}/{number_type}`; both segments are
/// skipped when empty.
pub struct AvailablePhoneNumbers {
    /// ISO 3166-1 alpha-2 country code, e.g. `US`.
    pub country_code: String,
    /// `Local`, `TollFree` or `Mobile`.
    pub number_type: String,
    pub area_code: String,
    /// Pattern the number must match; `*` matches any digit.
    pub contains: String,
    pub in_region: String,
    pub in_postal_code: String,
    pub sms_enabled: String,
    pub mms_enabled: String,
    pub voice_enabled: String,
    pub exclude_all_address_required: String,
    pub page_size: String,
}

impl Descriptor for AvailablePhoneNumbers {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource("/AvailablePhoneNumbers")
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("AreaCode", &self.area_code)
            .one("Contains", &self.contains)
            .one("InRegion", &self.in_region)
            .one("InPostalCode", &self.in_postal_code)
            .one("SmsEnabled", &self.sms_enabled)
            .one("MmsEnabled", &self.mms_enabled)
            .one("VoiceEnabled", &self.voice_enabled)
            .one("ExcludeAllAddressRequired", &self.exclude_all_address_required)
            .one("PageSize", &self.page_size)
    }
}
