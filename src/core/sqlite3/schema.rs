diesel::table! {
    contact (id) {
        id -> BigInt,
        first_name -> Text,
        last_name -> Text,
        email -> Nullable<Text>,
        address -> Nullable<Text>,
        phone_number -> Text,
    }
}
