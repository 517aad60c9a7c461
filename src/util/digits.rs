pub trait IntoDigits: Sized { 
    type Digit;
    fn into_digits(self) -> Vec<Self::Digit> { 
        self.into_rev_digits().into_iter().rev().collect()
    }

    fn into_rev_digits(self) -> Vec<Self::Digit>;
}

macro_rules! impl_into_digits {
    ($t: ty, $d: ty) => {
        impl IntoDigits for $t { 
            type Digit = $d;
            fn into_rev_digits(self) -> Vec<$d> {
                if self == 0 { return vec![0] }
        
                let mut num = self;
                (0..).map_while(|_| { 
                    if num > 0 { 
                        let d = (num % 10) as $d;
                        num /= 10;
                        Some(d)
                    } else {
                        None
                    }
                }).collect()
            }
        }                
    };
}

impl_into_digits!(usize, u8);
impl_into_digits!(u64, u8);
