use qa_harness::{ContractChecker, Error, Expectation, ResponseData};

pub const IS_REGISTERED: &str = "/v16/user/is-registered";
pub const LOCALE_HEADER: &str = "x-yummly-locale";

pub const UNREGISTERED_EMAIL: &str = "testuser@gmail.com";
pub const REGISTERED_EMAIL: &str = "john.m.lee@gmail.com";
pub const REGISTERED_ID_INDEX: u64 = 1;

pub fn method_not_allowed() -> Expectation {
    Expectation::new().status(405).header("allow", "GET")
}

/// The envelope returned for unknown, empty and malformed addresses alike.
pub fn not_found() -> Expectation {
    Expectation::new()
        .status(404)
        .body_field("code", "E_NO_SUCH_ENTITY")
        .body_field("description", "Entity does not exist")
        .body_field("entity", "User")
}

pub fn registered(id_index: u64) -> Expectation {
    Expectation::new().status(200).body_field("id-index", id_index)
}

pub fn bad_request() -> Expectation {
    Expectation::new().status(400)
}

/// GET on the endpoint, with the locale header and `email` parameter only when given.
pub async fn look_up(
    checker: &ContractChecker,
    locale: Option<&str>,
    email: Option<&str>,
) -> Result<ResponseData, Error> {
    let mut request = checker.given().optional_header(LOCALE_HEADER, locale);
    if let Some(email) = email {
        request = request.query_param("email", email);
    }

    request.get(IS_REGISTERED).await
}

pub async fn check_unregistered(checker: &ContractChecker, locale: Option<&str>) -> Result<(), Error> {
    let response = look_up(checker, locale, Some(UNREGISTERED_EMAIL)).await?;
    not_found().verify(&response)
}

pub async fn check_registered(checker: &ContractChecker, locale: Option<&str>) -> Result<(), Error> {
    let response = look_up(checker, locale, Some(REGISTERED_EMAIL)).await?;
    registered(REGISTERED_ID_INDEX).verify(&response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_harness::{contract_test, stub_server, CheckerConfiguration, TestSession};
    use test_case::test_case;

    fn configure_stub(configuration: &mut CheckerConfiguration) {
        configuration.set_base_uri(stub_server::base_uri().expect("stub server"));
    }

    // the live service is the configuration default
    #[cfg(feature = "live")]
    fn configure_live(_configuration: &mut CheckerConfiguration) {}

    #[contract_test(configure_stub)]
    async fn post_is_not_allowed_stub(checker: ContractChecker) -> Result<(), Error> {
        let response = checker.given().post(IS_REGISTERED).await?;
        method_not_allowed().verify(&response)
    }

    #[contract_test(configure_stub)]
    async fn put_is_not_allowed_stub(checker: ContractChecker) -> Result<(), Error> {
        let response = checker.given().put(IS_REGISTERED).await?;
        method_not_allowed().verify(&response)
    }

    #[contract_test(configure_stub)]
    async fn delete_is_not_allowed_stub(checker: ContractChecker) -> Result<(), Error> {
        let response = checker.given().delete(IS_REGISTERED).await?;
        method_not_allowed().verify(&response)
    }

    // the endpoint has to ignore the locale: absent, valid, empty and nonsense values
    #[test_case(None ; "no locale")]
    #[test_case(Some("en-US") ; "en us locale")]
    #[test_case(Some("fr-CA") ; "fr ca locale")]
    #[test_case(Some("") ; "empty locale")]
    #[test_case(Some("what-is-this") ; "invalid locale")]
    fn unregistered_user_is_not_found_stub(locale: Option<&'static str>) {
        TestSession::run_contract(configure_stub, move |checker| async move {
            check_unregistered(&checker, locale).await
        });
    }

    #[test_case(None ; "no locale")]
    #[test_case(Some("en-US") ; "en us locale")]
    #[test_case(Some("fr-CA") ; "fr ca locale")]
    #[test_case(Some("") ; "empty locale")]
    #[test_case(Some("what-is-this") ; "invalid locale")]
    fn registered_user_has_id_index_stub(locale: Option<&'static str>) {
        TestSession::run_contract(configure_stub, move |checker| async move {
            check_registered(&checker, locale).await
        });
    }

    #[contract_test(configure_stub)]
    async fn missing_email_is_a_bad_request_stub(checker: ContractChecker) -> Result<(), Error> {
        let response = look_up(&checker, Some("en-US"), None).await?;
        bad_request().verify(&response)
    }

    #[contract_test(configure_stub)]
    async fn empty_email_is_not_found_stub(checker: ContractChecker) -> Result<(), Error> {
        let response = look_up(&checker, Some("en-US"), Some("")).await?;
        not_found().verify(&response)
    }

    #[contract_test(configure_stub)]
    async fn badly_formed_email_is_not_found_stub(checker: ContractChecker) -> Result<(), Error> {
        let response = look_up(&checker, Some("en-US"), Some("john")).await?;
        not_found().verify(&response)
    }

    #[contract_test(configure_stub)]
    #[should_panic(expected = "body field `id-index`")]
    async fn unregistered_user_has_no_id_index_stub(checker: ContractChecker) -> Result<(), Error> {
        let response = look_up(&checker, None, Some(UNREGISTERED_EMAIL)).await?;
        Expectation::new().body_field("id-index", 1).verify(&response)
    }

    #[cfg(feature = "live")]
    #[contract_test(configure_live)]
    async fn post_is_not_allowed_live(checker: ContractChecker) -> Result<(), Error> {
        let response = checker.given().post(IS_REGISTERED).await?;
        method_not_allowed().verify(&response)
    }

    #[cfg(feature = "live")]
    #[contract_test(configure_live)]
    async fn put_is_not_allowed_live(checker: ContractChecker) -> Result<(), Error> {
        let response = checker.given().put(IS_REGISTERED).await?;
        method_not_allowed().verify(&response)
    }

    #[cfg(feature = "live")]
    #[contract_test(configure_live)]
    async fn delete_is_not_allowed_live(checker: ContractChecker) -> Result<(), Error> {
        let response = checker.given().delete(IS_REGISTERED).await?;
        method_not_allowed().verify(&response)
    }

    #[cfg(feature = "live")]
    #[test_case(None ; "no locale")]
    #[test_case(Some("en-US") ; "en us locale")]
    #[test_case(Some("fr-CA") ; "fr ca locale")]
    #[test_case(Some("") ; "empty locale")]
    #[test_case(Some("what-is-this") ; "invalid locale")]
    fn unregistered_user_is_not_found_live(locale: Option<&'static str>) {
        TestSession::run_contract(configure_live, move |checker| async move {
            check_unregistered(&checker, locale).await
        });
    }

    #[cfg(feature = "live")]
    #[test_case(None ; "no locale")]
    #[test_case(Some("en-US") ; "en us locale")]
    #[test_case(Some("fr-CA") ; "fr ca locale")]
    #[test_case(Some("") ; "empty locale")]
    #[test_case(Some("what-is-this") ; "invalid locale")]
    fn registered_user_has_id_index_live(locale: Option<&'static str>) {
        TestSession::run_contract(configure_live, move |checker| async move {
            check_registered(&checker, locale).await
        });
    }

    #[cfg(feature = "live")]
    #[contract_test(configure_live)]
    async fn missing_email_is_a_bad_request_live(checker: ContractChecker) -> Result<(), Error> {
        let response = look_up(&checker, Some("en-US"), None).await?;
        bad_request().verify(&response)
    }

    #[cfg(feature = "live")]
    #[contract_test(configure_live)]
    async fn empty_email_is_not_found_live(checker: ContractChecker) -> Result<(), Error> {
        let response = look_up(&checker, Some("en-US"), Some("")).await?;
        not_found().verify(&response)
    }

    #[cfg(feature = "live")]
    #[contract_test(configure_live)]
    async fn badly_formed_email_is_not_found_live(checker: ContractChecker) -> Result<(), Error> {
        let response = look_up(&checker, Some("en-US"), Some("john")).await?;
        not_found().verify(&response)
    }
}
