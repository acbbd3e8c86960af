use chrono::NaiveDate;
use expense_repo::transaction_repo::NewTransaction;
use expense_repo::user_repo::NewUser;
use fake::faker::internet::en::{Password, SafeEmail, Username};
use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

pub trait Generator<T> {
    fn gen(&mut self) -> T;
}

pub struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    pub fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

pub struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    pub fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeAmount;

impl Generator<Decimal> for FakeAmount {
    fn gen(&mut self) -> Decimal {
        // cents, never zero
        let cents = (1i64..1_000_000).fake::<i64>();
        Decimal::new(cents, 2)
    }
}

struct FakeDescription;

impl Generator<Option<String>> for FakeDescription {
    fn gen(&mut self) -> Option<String> {
        if Faker.fake::<bool>() {
            Some(Sentence(3..8).fake())
        } else {
            None
        }
    }
}

struct FakeDate;

impl Generator<NaiveDate> for FakeDate {
    fn gen(&mut self) -> NaiveDate {
        let year = (2015i32..2026).fake::<i32>();
        let month = (1u32..13).fake::<u32>();
        let day = (1u32..29).fake::<u32>();
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

pub fn generate_new_user() -> NewUser {
    NewUser {
        username: Username().fake(),
        email: SafeEmail().fake(),
        password: Password(8..16).fake(),
    }
}

#[allow(dead_code)]
pub struct NewTransactionGenerator {
    user_gen: Box<dyn Generator<i32>>,
    amnt_gen: Box<dyn Generator<Decimal>>,
    desc_gen: Box<dyn Generator<Option<String>>>,
    cat_gen: Box<dyn Generator<i32>>,
    date_gen: Box<dyn Generator<NaiveDate>>,
}

#[allow(dead_code)]
impl NewTransactionGenerator {
    pub fn with_user(mut self, user_id: i32) -> NewTransactionGenerator {
        self.user_gen = RandomSample::boxed(vec![user_id]);
        self
    }

    pub fn with_dates(mut self, dates: Vec<NaiveDate>) -> NewTransactionGenerator {
        self.date_gen = Predefined::boxed(dates);
        self
    }

    pub fn generate(&mut self) -> NewTransaction {
        NewTransaction::new(
            self.user_gen.gen(),
            self.amnt_gen.gen(),
            self.desc_gen.gen(),
            self.cat_gen.gen(),
            self.date_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewTransaction> {
        (0..count).map(|_| self.generate()).collect()
    }
}

impl Default for NewTransactionGenerator {
    fn default() -> Self {
        NewTransactionGenerator {
            user_gen: RandomSample::boxed(vec![1]),
            amnt_gen: Box::new(FakeAmount),
            desc_gen: Box::new(FakeDescription),
            cat_gen: RandomSample::boxed(vec![1, 2, 3, 4]),
            date_gen: Box::new(FakeDate),
        }
    }
}
