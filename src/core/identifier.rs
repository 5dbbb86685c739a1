use crate::core::error::AppError;
use crate::core::upstream::{ParamValue, QueryParams};

#[derive(Debug, Clone)]
pub struct IdentifierForm {
    members: Vec<(&'static str, Option<ParamValue>)>,
}

impl IdentifierForm {
    pub fn single<V>(external_name: &'static str, value: Option<V>) -> Self
    where
        V: Into<ParamValue>,
    {
        Self {
            members: vec![(external_name, value.map(Into::into))],
        }
    }

    pub fn pair<A, B>(
        first_name: &'static str,
        first: Option<A>,
        second_name: &'static str,
        second: Option<B>,
    ) -> Self
    where
        A: Into<ParamValue>,
        B: Into<ParamValue>,
    {
        Self {
            members: vec![
                (first_name, first.map(Into::into)),
                (second_name, second.map(Into::into)),
            ],
        }
    }

    // Blank strings are absent; numeric members count whenever they are set.
    pub fn is_populated(&self) -> bool {
        self.members
            .iter()
            .all(|(_, value)| value.as_ref().is_some_and(|value| !value.is_blank()))
    }

    fn write_into(self, query: &mut QueryParams) {
        for (name, value) in self.members {
            if let Some(value) = value {
                query.insert(name.to_string(), value);
            }
        }
    }
}

pub fn resolve_first<I>(forms: I, acceptable: &str) -> Result<QueryParams, AppError>
where
    I: IntoIterator<Item = IdentifierForm>,
{
    let form = forms
        .into_iter()
        .find(IdentifierForm::is_populated)
        .ok_or_else(|| AppError::missing_identifier(acceptable))?;

    let mut query = QueryParams::new();
    form.write_into(&mut query);
    Ok(query)
}

pub fn resolve_any<I>(forms: I, acceptable: &str) -> Result<QueryParams, AppError>
where
    I: IntoIterator<Item = IdentifierForm>,
{
    let mut query = QueryParams::new();
    for form in forms.into_iter().filter(IdentifierForm::is_populated) {
        form.write_into(&mut query);
    }

    if query.is_empty() {
        return Err(AppError::missing_identifier(acceptable));
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCEPTABLE: &str = "Please provide id, address, line1+line2, or region+parcel.";

    fn forms(
        id: Option<&str>,
        address: Option<&str>,
        line1: Option<&str>,
        line2: Option<&str>,
        region: Option<&str>,
        parcel: Option<&str>,
    ) -> Vec<IdentifierForm> {
        vec![
            IdentifierForm::single("AttomID", id),
            IdentifierForm::single("address", address),
            IdentifierForm::pair("address1", line1, "address2", line2),
            IdentifierForm::pair("fips", region, "apn", parcel),
        ]
    }

    fn keys(query: &QueryParams) -> Vec<&str> {
        query.keys().map(String::as_str).collect()
    }

    #[test]
    fn picks_highest_precedence_form() {
        let query = resolve_first(
            forms(Some("1"), Some("a"), Some("l1"), Some("l2"), None, None),
            ACCEPTABLE,
        )
        .expect("resolves");
        assert_eq!(keys(&query), vec!["AttomID"]);

        let query = resolve_first(
            forms(None, None, Some("l1"), Some("l2"), Some("06"), Some("123")),
            ACCEPTABLE,
        )
        .expect("resolves");
        assert_eq!(keys(&query), vec!["address1", "address2"]);
    }

    #[test]
    fn half_pair_is_treated_as_absent() {
        let query = resolve_first(
            forms(None, None, Some("l1"), None, Some("06"), Some("123")),
            ACCEPTABLE,
        )
        .expect("falls through to the parcel pair");
        assert_eq!(keys(&query), vec!["apn", "fips"]);

        let error = resolve_first(forms(None, None, Some("l1"), None, None, Some("123")), ACCEPTABLE)
            .expect_err("no complete form");
        assert_eq!(error, AppError::missing_identifier(ACCEPTABLE));
    }

    #[test]
    fn blank_text_does_not_count() {
        let error = resolve_first(forms(Some(""), Some("   "), None, None, None, None), ACCEPTABLE)
            .expect_err("blank values are absent");
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn zero_coordinates_are_present() {
        let query = resolve_first(
            vec![IdentifierForm::pair(
                "latitude",
                Some(0.0),
                "longitude",
                Some(0.0),
            )],
            ACCEPTABLE,
        )
        .expect("coordinates resolve");
        assert_eq!(query.get("latitude"), Some(&ParamValue::Float(0.0)));
    }

    #[test]
    fn resolve_any_forwards_every_populated_form() {
        let query = resolve_any(
            vec![
                IdentifierForm::single("geoIdV4", Some("abc")),
                IdentifierForm::single("areaId", Some("CO06059")),
            ],
            ACCEPTABLE,
        )
        .expect("resolves");
        assert_eq!(keys(&query), vec!["areaId", "geoIdV4"]);

        let error = resolve_any(
            vec![IdentifierForm::single::<&str>("geoIdV4", None)],
            ACCEPTABLE,
        )
        .expect_err("nothing populated");
        assert_eq!(error.envelope_message(), ACCEPTABLE);
    }
}
