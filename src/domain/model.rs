use crate::domain::ports::Greeter;
use serde::{Deserialize, Serialize};

pub const ADULT_AGE: i64 = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    age: i64,
    email: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn set_age(&mut self, age: i64) {
        self.age = age;
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// 只覆寫 `update` 中有提供的欄位，其餘保持原值
    pub fn update_info(&mut self, update: PersonUpdate) -> &mut Self {
        if update.is_empty() {
            return self;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        self
    }
}

impl Greeter for Person {
    fn greeting(&self) -> String {
        format!(
            "Hello, my name is {} and I am {} years old.",
            self.name, self.age
        )
    }
}

/// [`Person::update_info`] 的部分更新，`None` 表示未提供
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
}

impl PersonUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    person: Person,
    job_title: String,
    salary: f64,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        job_title: impl Into<String>,
        salary: f64,
        email: Option<String>,
    ) -> Self {
        Self {
            person: Person::new(name, age, email),
            job_title: job_title.into(),
            salary,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn is_adult(&self) -> bool {
        self.person.is_adult()
    }

    /// 更新內含的 Person 欄位，回傳 Employee 本身以便鏈式呼叫
    pub fn update_info(&mut self, update: PersonUpdate) -> &mut Self {
        self.person.update_info(update);
        self
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn set_job_title(&mut self, job_title: impl Into<String>) {
        self.job_title = job_title.into();
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }
}

impl Greeter for Employee {
    fn greeting(&self) -> String {
        let base = Greeter::greeting(&self.person);
        format!("{} I work as a {}.", base, self.job_title)
    }
}

/// 腳本持有的連線設定，缺少的鍵使用預設值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
            debug: true,
        }
    }
}
