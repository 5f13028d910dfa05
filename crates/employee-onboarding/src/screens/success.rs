//! Success screen - shows the verified employee.

use super::Screen;
use crate::console::Console;
use crate::error::AppResult;
use crate::navigator::Route;
use employee_client::EmployeeRecord;
use tokio::io::{AsyncBufRead, AsyncWrite};

#[derive(Debug, Default)]
pub struct SuccessScreen {
    employee: Option<EmployeeRecord>,
}

impl SuccessScreen {
    pub fn new(employee: Option<EmployeeRecord>) -> Self {
        Self { employee }
    }

    pub fn employee(&self) -> Option<&EmployeeRecord> {
        self.employee.as_ref()
    }

    /// Detail lines; anything missing renders blank.
    pub fn details(&self) -> Vec<String> {
        let employee = self.employee.as_ref();
        let name = employee.and_then(EmployeeRecord::name).unwrap_or_default();
        let email = employee.map(EmployeeRecord::email).unwrap_or_default();
        let phone_number = employee
            .and_then(EmployeeRecord::phone_number)
            .unwrap_or_default();

        vec![
            format!("Name: {}", name),
            format!("Email: {}", email),
            format!("Phone Number: {}", phone_number),
        ]
    }

    pub async fn display<R, W>(&self, console: &mut Console<R, W>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        for line in self.details() {
            console.line(&line).await?;
        }
        Ok(())
    }
}

impl Screen for SuccessScreen {
    fn route(&self) -> Route {
        Route::Success
    }

    fn title(&self) -> &'static str {
        "Registration Successful"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::employee;

    #[test]
    fn test_details_from_record() {
        let screen = SuccessScreen::new(Some(employee("A", "user@example.com", "1")));

        assert_eq!(
            screen.details(),
            vec!["Name: A", "Email: user@example.com", "Phone Number: 1"]
        );
    }

    #[test]
    fn test_details_without_record_are_blank() {
        let screen = SuccessScreen::new(None);

        assert_eq!(screen.details(), vec!["Name: ", "Email: ", "Phone Number: "]);
    }

    #[test]
    fn test_details_with_partial_record() {
        let record = EmployeeRecord::from_value(serde_json::json!({"email": "a@b.c"})).unwrap();
        let screen = SuccessScreen::new(Some(record));

        assert_eq!(screen.details(), vec!["Name: ", "Email: a@b.c", "Phone Number: "]);
    }

    #[test]
    fn test_details_render_non_string_fields() {
        let record = EmployeeRecord::from_value(serde_json::json!({
            "email": "a@b.c",
            "name": null,
            "phoneNumber": 5550100
        }))
        .unwrap();
        let screen = SuccessScreen::new(Some(record));

        assert_eq!(
            screen.details(),
            vec!["Name: ", "Email: a@b.c", "Phone Number: 5550100"]
        );
    }

    #[tokio::test]
    async fn test_display_writes_details() {
        let mut console = Console::new(&b""[..], Vec::new());
        SuccessScreen::new(None).display(&mut console).await.unwrap();

        let out = String::from_utf8(console.into_parts().1).unwrap();
        assert_eq!(out, "Name: \nEmail: \nPhone Number: \n");
    }
}
